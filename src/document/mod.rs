// SPDX-License-Identifier: MPL-2.0
//! Gallery document format.
//!
//! The document is a JSON object with a `photos` array and an optional
//! `categories` block:
//!
//! ```json
//! {
//!   "photos": [
//!     { "thumb": "photos/thumbs/kazan/1-thumb.jpg", "full": "photos/kazan/1.jpg",
//!       "alt": "kazan 1", "category": "kazan", "date": "2024-05-01", "order": 1 }
//!   ],
//!   "categories": {
//!     "kazan": { "description": "Kazan", "order": 1,
//!                "subcategories": { "kremlin": { "order": 1 } } }
//!   }
//! }
//! ```
//!
//! A bare array of photo records is accepted too and means "no category metadata".
//!
//! The object form may also carry a `stories` array of short text cards:
//!
//! ```json
//! { "stories": [ { "title": "The Quiet River", "date": "October 2025",
//!                  "excerpt": "The fog hung low...", "link": "stories/river.html" } ] }
//! ```
//!
//! Optional fields that cannot be used (an `order` that is not a number, a
//! date nobody can read, a story without a link) are dropped with a warning
//! instead of failing the whole document.

use crate::application::port::DocumentSource;
use crate::domain::photo::{
    CaptureDate, CategoryMeta, CategoryMetadata, OrderKey, Photo, SubcategoryMeta,
    DEFAULT_CATEGORY, UNORDERED,
};
use crate::domain::story::Story;
use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashSet};

// =============================================================================
// Wire records
// =============================================================================

/// A photo as written in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub thumb: String,
    pub full: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_order",
        skip_serializing_if = "Option::is_none"
    )]
    pub order: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
}

/// Metadata of one subcategory as written in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubcategoryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_order",
        skip_serializing_if = "Option::is_none"
    )]
    pub order: Option<f64>,
}

/// Metadata of one category as written in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_order",
        skip_serializing_if = "Option::is_none"
    )]
    pub order: Option<f64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub subcategories: BTreeMap<String, SubcategoryRecord>,
}

/// A story card as written in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub link: String,
}

/// Object form of the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    #[serde(default)]
    pub photos: Vec<PhotoRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<String, CategoryRecord>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stories: Vec<StoryRecord>,
}

/// Accepts an order written as a number or a numeric string.
///
/// Anything else (text, booleans, non-finite numbers) is logged and read as
/// "no order".
fn deserialize_order<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let order = match &raw {
        None | Some(serde_json::Value::Null) => return Ok(None),
        Some(serde_json::Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    match order.filter(|value| value.is_finite()) {
        Some(value) => Ok(Some(value)),
        None => {
            if let Some(value) = raw {
                log::warn!("Ignoring unusable order {}", value);
            }
            Ok(None)
        }
    }
}

// =============================================================================
// Domain conversion
// =============================================================================

/// A parsed gallery document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryDocument {
    pub photos: Vec<Photo>,
    /// Category metadata, `None` when the document has no `categories` block.
    pub categories: Option<CategoryMetadata>,
    /// Story cards in document order.
    pub stories: Vec<Story>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl From<PhotoRecord> for Photo {
    fn from(record: PhotoRecord) -> Self {
        Photo {
            thumbnail_path: record.thumb,
            full_path: record.full,
            alt_text: non_empty(record.alt),
            description: non_empty(record.description),
            capture_date: non_empty(record.date).map(|d| CaptureDate::parse(&d)),
            explicit_order: record.order.and_then(OrderKey::new),
            category: non_empty(record.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            subcategory: non_empty(record.subcategory),
        }
    }
}

impl From<CategoryRecord> for CategoryMeta {
    fn from(record: CategoryRecord) -> Self {
        CategoryMeta {
            description: non_empty(record.description),
            display_order: record.order.and_then(OrderKey::new).unwrap_or(UNORDERED),
            subcategories: record
                .subcategories
                .into_iter()
                .map(|(name, sub)| {
                    (
                        name,
                        SubcategoryMeta {
                            description: non_empty(sub.description),
                            display_order: sub
                                .order
                                .and_then(OrderKey::new)
                                .unwrap_or(UNORDERED),
                        },
                    )
                })
                .collect(),
        }
    }
}

impl From<DocumentRecord> for GalleryDocument {
    fn from(record: DocumentRecord) -> Self {
        let mut seen = HashSet::new();
        let mut photos = Vec::with_capacity(record.photos.len());
        for photo in record.photos.into_iter().map(Photo::from) {
            if seen.insert(photo.full_path.clone()) {
                photos.push(photo);
            } else {
                log::warn!("Ignoring duplicate photo {}", photo.full_path);
            }
        }

        let categories: Option<CategoryMetadata> = record.categories.map(|categories| {
            categories
                .into_iter()
                .map(|(name, category)| (name, CategoryMeta::from(category)))
                .collect()
        });

        if let Some(meta) = &categories {
            let mut missing: Vec<&str> = photos
                .iter()
                .map(|p| p.category.as_str())
                .filter(|c| !meta.contains_key(*c))
                .collect();
            missing.sort_unstable();
            missing.dedup();
            if !missing.is_empty() {
                log::warn!(
                    "Categories without metadata: {}",
                    missing.join(", ")
                );
            }
        }

        let stories = record
            .stories
            .into_iter()
            .filter_map(|story| {
                let title = story.title.trim().to_string();
                let link = story.link.trim().to_string();
                if title.is_empty() || link.is_empty() {
                    log::warn!("Ignoring story without title or link: {:?}", story.title);
                    return None;
                }
                Some(Story {
                    title,
                    date: non_empty(story.date),
                    excerpt: non_empty(story.excerpt),
                    link,
                })
            })
            .collect();

        GalleryDocument {
            photos,
            categories,
            stories,
        }
    }
}

// =============================================================================
// Parsing and loading
// =============================================================================

/// Parses the document text.
///
/// # Errors
///
/// Returns [`Error::Document`] if the text is not JSON, or is neither an
/// object nor an array of photo records.
pub fn parse_document(text: &str) -> Result<GalleryDocument> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let record = match value {
        serde_json::Value::Array(_) => DocumentRecord {
            photos: serde_json::from_value(value)?,
            ..DocumentRecord::default()
        },
        serde_json::Value::Object(_) => serde_json::from_value(value)?,
        other => {
            return Err(Error::Document(format!(
                "expected an object or an array, found {}",
                json_kind(&other)
            )))
        }
    };
    Ok(GalleryDocument::from(record))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Fetches and parses the gallery document.
///
/// # Errors
///
/// Returns [`Error::Fetch`] if the source cannot be read and
/// [`Error::Document`] if its content is malformed.
pub async fn load_document(source: &impl DocumentSource) -> Result<GalleryDocument> {
    log::info!("Loading gallery document from {}", source.location());
    let text = source.fetch().await?;
    let document = parse_document(&text)?;
    log::info!(
        "Loaded {} photos ({} categories described, {} stories)",
        document.photos.len(),
        document.categories.as_ref().map_or(0, |c| c.len()),
        document.stories.len()
    );
    Ok(document)
}
