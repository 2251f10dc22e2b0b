// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery ordering and selection.
//!
//! Measures the performance of:
//! - Ordering a large photo set (explicit order, dates and natural names mixed)
//! - Resolving a category selection (filter + order per subcategory)
//! - Revealing every page of a category

use criterion::{criterion_group, criterion_main, Criterion};
use gallery_lens::application::query::GalleryQuery;
use gallery_lens::domain::ordering::order_photos;
use gallery_lens::domain::photo::Photo;
use gallery_lens::domain::selection::Selection;
use gallery_lens::domain::taxonomy::TaxonomyOrder;
use gallery_lens::domain::ui::PageSize;
use std::hint::black_box;

const CATEGORIES: [&str; 4] = ["kazan", "peterburg", "other", "sochi"];
const SUBCATEGORIES: [&str; 3] = ["irbis", "kremlin", "sea"];

/// Synthetic photo set where a third of the photos has an explicit order and
/// another third a capture date.
fn synthetic_photos(count: usize) -> Vec<Photo> {
    (0..count)
        .map(|i| {
            let category = CATEGORIES[i % CATEGORIES.len()];
            let mut photo = Photo::new(
                format!("photos/thumbs/{category}/IMG_{i}-thumb.jpg"),
                format!("photos/{category}/IMG_{i}.jpg"),
                category,
            );
            match i % 3 {
                0 => photo = photo.with_order((count - i) as i64),
                1 => photo = photo.with_date(&format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1)),
                _ => {}
            }
            if i % 5 == 0 {
                photo = photo.with_subcategory(SUBCATEGORIES[i % SUBCATEGORIES.len()]);
            }
            photo
        })
        .collect()
}

fn bench_order_photos(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_ordering");
    let photos = synthetic_photos(2_000);

    group.bench_function("order_2000", |b| {
        b.iter(|| black_box(order_photos(black_box(&photos))));
    });

    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_ordering");
    let query = GalleryQuery::new(
        synthetic_photos(2_000),
        None,
        &TaxonomyOrder::default(),
        PageSize::default(),
    );

    group.bench_function("resolve_all", |b| {
        b.iter(|| black_box(query.resolve(&Selection::All)));
    });

    group.bench_function("resolve_category", |b| {
        let selection = Selection::Category("kazan".into());
        b.iter(|| black_box(query.resolve(&selection)));
    });

    group.bench_function("page_through_category", |b| {
        b.iter(|| {
            let mut query = query.clone();
            query.select(Selection::Category("other".into()));
            let mut revealed = 0;
            while query.has_more() {
                revealed += query.load_more().items.len();
            }
            black_box(revealed)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_order_photos, bench_select);
criterion_main!(benches);
