// SPDX-License-Identifier: MPL-2.0
use gallery_lens::app::{Gallery, GalleryState, Message};
use gallery_lens::application::port::DocumentError;
use gallery_lens::config::{self, Config, GalleryConfig, TaxonomyConfig};
use gallery_lens::domain::selection::Selection;
use gallery_lens::error::Error;
use gallery_lens::infrastructure::{source_for, FsDocumentSource};
use gallery_lens::render::RenderItem;
use std::collections::BTreeMap;
use std::path::Path;
use tempfile::tempdir;

/// Category "x" with two top-level photos and two photos in each of the
/// subcategories "a" and "b", plus a second category "y".
const FLAT_DOCUMENT: &str = r#"[
    { "thumb": "t/a2.jpg", "full": "p/x/a/img2.jpg", "category": "x", "subcategory": "a" },
    { "thumb": "t/top10.jpg", "full": "p/x/top10.jpg", "category": "x" },
    { "thumb": "t/b1.jpg", "full": "p/x/b/img1.jpg", "category": "x", "subcategory": "b" },
    { "thumb": "t/y1.jpg", "full": "p/y/1.jpg", "category": "y", "alt": "Sunset" },
    { "thumb": "t/a1.jpg", "full": "p/x/a/img1.jpg", "category": "x", "subcategory": "a" },
    { "thumb": "t/top2.jpg", "full": "p/x/top2.jpg", "category": "x" },
    { "thumb": "t/b2.jpg", "full": "p/x/b/img2.jpg", "category": "x", "subcategory": "b" }
]"#;

const OBJECT_DOCUMENT: &str = r#"{
    "photos": [
        { "thumb": "t/1.jpg", "full": "p/kazan/1.jpg", "category": "kazan", "date": "2024-05-01" },
        { "thumb": "t/2.jpg", "full": "p/kazan/2.jpg", "category": "kazan", "order": 1 },
        { "thumb": "t/3.jpg", "full": "p/other/irbis/3.jpg", "category": "other",
          "subcategory": "irbis", "description": "Snow leopard" },
        { "thumb": "t/4.jpg", "full": "p/spb/4.jpg", "category": "peterburg" }
    ],
    "categories": {
        "peterburg": { "order": 1, "description": "Saint Petersburg" },
        "kazan": { "order": 2 },
        "other": { "order": 3, "subcategories": { "irbis": { "description": "Irbis" } } }
    }
}"#;

fn write_document(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("photos_data.json");
    std::fs::write(&path, content).expect("failed to write document");
    path
}

fn full_paths(items: &[RenderItem]) -> Vec<&str> {
    items
        .iter()
        .filter_map(|item| match item {
            RenderItem::Tile { full, .. } => Some(full.as_str()),
            _ => None,
        })
        .collect()
}

fn headings(items: &[RenderItem]) -> Vec<&str> {
    items
        .iter()
        .filter_map(|item| match item {
            RenderItem::Heading { label } => Some(label.as_str()),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn configured_subcategory_order_drives_category_listing() {
    let dir = tempdir().expect("failed to create temp dir");
    let document = write_document(dir.path(), FLAT_DOCUMENT);

    let mut subcategories = BTreeMap::new();
    subcategories.insert("x".to_string(), vec!["b".to_string(), "a".to_string()]);
    let settings = Config {
        gallery: GalleryConfig {
            page_size: Some(100),
        },
        taxonomy: TaxonomyConfig {
            categories: vec!["all".into(), "y".into(), "x".into()],
            subcategories,
        },
        ..Config::default()
    };
    let settings_path = dir.path().join("config").join("settings.toml");
    config::save_to_path(&settings, &settings_path).expect("failed to save settings");
    let settings = config::load_from_path(&settings_path).expect("failed to load settings");

    let mut gallery = Gallery::from_config(&settings);
    let loaded = gallery.load(&FsDocumentSource::new(&document)).await;
    assert!(matches!(gallery.state(), GalleryState::Ready(_)));
    assert_eq!(headings(&loaded.items), vec!["Y", "X"]);
    assert_eq!(
        full_paths(&loaded.items),
        vec!["p/y/1.jpg", "p/x/top2.jpg", "p/x/top10.jpg"]
    );

    let output = gallery.update(Message::Select(Selection::Category("x".into())));
    assert_eq!(
        full_paths(&output.items),
        vec![
            "p/x/top2.jpg",
            "p/x/top10.jpg",
            "p/x/b/img1.jpg",
            "p/x/b/img2.jpg",
            "p/x/a/img1.jpg",
            "p/x/a/img2.jpg",
        ]
    );
    assert!(!output.items.contains(&RenderItem::LoadMore));
}

#[tokio::test]
async fn paging_resets_when_selection_changes() {
    let dir = tempdir().expect("failed to create temp dir");
    let document = write_document(dir.path(), FLAT_DOCUMENT);
    let settings = Config {
        gallery: GalleryConfig { page_size: Some(2) },
        ..Config::default()
    };

    let mut gallery = Gallery::from_config(&settings);
    gallery.load(&source_for(&document.to_string_lossy(), settings.fetch_timeout())).await;

    let first = gallery.update(Message::Select(Selection::Category("x".into())));
    assert_eq!(full_paths(&first.items).len(), 2);
    assert_eq!(first.items.last(), Some(&RenderItem::LoadMore));
    let second = gallery.update(Message::LoadMore);
    assert_eq!(full_paths(&second.items).len(), 2);

    gallery.update(Message::Select(Selection::Category("y".into())));
    let again = gallery.update(Message::Select(Selection::Category("x".into())));
    assert_eq!(full_paths(&again.items), full_paths(&first.items));
    assert_eq!(again.items.last(), Some(&RenderItem::LoadMore));
}

#[tokio::test]
async fn metadata_document_orders_categories_and_describes_them() {
    let dir = tempdir().expect("failed to create temp dir");
    let document = write_document(dir.path(), OBJECT_DOCUMENT);

    let mut gallery = Gallery::from_config(&Config::default());
    let loaded = gallery.load(&FsDocumentSource::new(&document)).await;
    assert_eq!(headings(&loaded.items), vec!["Peterburg", "Kazan"]);
    // Explicit order first, then the dated photo.
    assert_eq!(
        full_paths(&loaded.items),
        vec!["p/spb/4.jpg", "p/kazan/2.jpg", "p/kazan/1.jpg"]
    );

    let output = gallery.update(Message::Select(Selection::Category("peterburg".into())));
    assert_eq!(
        output.items.first(),
        Some(&RenderItem::Description {
            text: "Saint Petersburg".into()
        })
    );

    let output = gallery.update(Message::Select(Selection::Subcategory {
        category: "other".into(),
        subcategory: "irbis".into(),
    }));
    assert_eq!(
        output.items.first(),
        Some(&RenderItem::Description {
            text: "Irbis".into()
        })
    );

    let output = gallery.update(Message::Open {
        full: "p/other/irbis/3.jpg".into(),
    });
    let view = output.lightbox.expect("lightbox open");
    assert_eq!(view.description, "Snow leopard");
    assert_eq!(view.alt, "other 3");
}

#[tokio::test]
async fn lightbox_cycles_through_selection_with_keys() {
    let dir = tempdir().expect("failed to create temp dir");
    let document = write_document(dir.path(), FLAT_DOCUMENT);

    let mut gallery = Gallery::from_config(&Config::default());
    gallery.load(&FsDocumentSource::new(&document)).await;
    gallery.update(Message::Select(Selection::from_names("x", Some("a"))));

    let opened = gallery.update(Message::Open {
        full: "p/x/a/img1.jpg".into(),
    });
    assert_eq!(opened.lightbox.as_ref().map(|v| v.total), Some(2));

    let next = gallery.update(Message::Key("ArrowRight".into()));
    assert_eq!(next.lightbox.map(|v| v.full), Some("p/x/a/img2.jpg".into()));
    let wrapped = gallery.update(Message::Key("ArrowRight".into()));
    assert_eq!(wrapped.lightbox.map(|v| v.full), Some("p/x/a/img1.jpg".into()));

    let closed = gallery.update(Message::Key("Escape".into()));
    assert!(closed.lightbox.is_none());
}

#[tokio::test]
async fn missing_document_leaves_gallery_failed() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut gallery = Gallery::from_config(&Config::default());
    let output = gallery
        .load(&FsDocumentSource::new(dir.path().join("absent.json")))
        .await;

    assert!(output.items.is_empty());
    assert!(matches!(
        gallery.error(),
        Some(Error::Fetch(DocumentError::NotFound(_)))
    ));
    let ignored = gallery.update(Message::Select(Selection::All));
    assert!(ignored.items.is_empty());
}

#[tokio::test]
async fn malformed_document_leaves_gallery_failed() {
    let dir = tempdir().expect("failed to create temp dir");
    let document = write_document(dir.path(), "{ \"photos\": [ { \"thumb\": 1 } ] }");
    let mut gallery = Gallery::from_config(&Config::default());
    gallery.load(&FsDocumentSource::new(&document)).await;
    assert!(matches!(gallery.error(), Some(Error::Document(_))));
}

#[tokio::test]
async fn empty_document_renders_nothing() {
    let dir = tempdir().expect("failed to create temp dir");
    let document = write_document(dir.path(), "{ \"photos\": [] }");
    let mut gallery = Gallery::from_config(&Config::default());
    let output = gallery.load(&FsDocumentSource::new(&document)).await;
    assert!(output.items.is_empty());

    let output = gallery.update(Message::Select(Selection::Category("x".into())));
    assert!(output.items.is_empty());
    assert!(gallery.update(Message::Next).lightbox.is_none());
}

#[tokio::test]
async fn document_with_stories_and_loose_orders_still_loads() {
    let dir = tempdir().expect("failed to create temp dir");
    let document = write_document(
        dir.path(),
        r#"{
            "photos": [
                { "thumb": "t/a.jpg", "full": "p/x/a.jpg", "category": "x", "order": 1.5 },
                { "thumb": "t/b.jpg", "full": "p/x/b.jpg", "category": "x", "order": "first" },
                { "thumb": "t/c.jpg", "full": "p/x/c.jpg", "category": "x", "order": 1 }
            ],
            "stories": [
                { "title": "The Quiet River", "date": "October 2025",
                  "excerpt": "The fog hung low", "link": "stories/river.html" },
                { "title": "Draft without a page" }
            ]
        }"#,
    );

    let mut gallery = Gallery::from_config(&Config::default());
    let loaded = gallery.load(&FsDocumentSource::new(&document)).await;
    assert!(gallery.error().is_none());
    assert_eq!(
        full_paths(&loaded.items),
        vec!["p/x/c.jpg", "p/x/a.jpg", "p/x/b.jpg"]
    );

    let output = gallery.update(Message::ShowStories);
    assert!(output.replace);
    assert_eq!(
        output.items,
        vec![RenderItem::Story {
            title: "The Quiet River".into(),
            date: "October 2025".into(),
            excerpt: "The fog hung low".into(),
            link: "stories/river.html".into(),
        }]
    );
}
