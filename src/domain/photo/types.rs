// SPDX-License-Identifier: MPL-2.0
//! Core photo and category types for the domain layer.
//!
//! These types are built once from the input document and never mutated
//! afterwards. The full-resolution path is the identity of a photo.

use chrono::{DateTime, NaiveDate};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Display order assigned to categories and subcategories that do not declare one.
///
/// Sorts after every finite order.
pub const UNORDERED: OrderKey = OrderKey(f64::MAX);

/// Grouping used for photos whose record carries no category.
pub const DEFAULT_CATEGORY: &str = "uncategorized";

// =============================================================================
// OrderKey
// =============================================================================

/// A finite order number as written by the author, fractions included.
///
/// Compared with `f64::total_cmp`; `-0.0` is stored as `0.0` so equal numbers
/// compare equal.
#[derive(Debug, Clone, Copy)]
pub struct OrderKey(f64);

impl OrderKey {
    /// Returns `None` for NaN and infinities.
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Some(Self(if value == 0.0 { 0.0 } else { value }))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<i64> for OrderKey {
    // Orders beyond 2^53 lose precision, far outside any hand-written value.
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self(value as f64)
    }
}

impl PartialEq for OrderKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrderKey {}

impl PartialOrd for OrderKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

// =============================================================================
// CaptureDate
// =============================================================================

/// Capture date of a photo.
///
/// Keeps the text exactly as written in the document (it is shown verbatim in
/// the lightbox) alongside the calendar date used for ordering, when the text
/// could be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureDate {
    raw: String,
    parsed: Option<NaiveDate>,
}

impl CaptureDate {
    /// Parses a date as written in the document.
    ///
    /// Accepted shapes: `2024-01-31`, an RFC 3339 timestamp, `2024-01`
    /// and `January 2024`. Anything else is kept for display only.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let parsed = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(trimmed)
                    .ok()
                    .map(|dt| dt.date_naive())
            })
            .or_else(|| NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d").ok())
            .or_else(|| NaiveDate::parse_from_str(&format!("1 {trimmed}"), "%d %B %Y").ok());

        Self {
            raw: raw.to_string(),
            parsed,
        }
    }

    /// The date text as it appears in the document.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The calendar date, if the text could be parsed.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        self.parsed
    }
}

// =============================================================================
// Photo
// =============================================================================

/// A single photo of the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    /// Path or URL of the thumbnail shown in the grid.
    pub thumbnail_path: String,
    /// Path or URL of the full-resolution image. Unique per photo.
    pub full_path: String,
    pub alt_text: Option<String>,
    pub description: Option<String>,
    pub capture_date: Option<CaptureDate>,
    /// Explicit position requested by the author; wins over every other rule.
    pub explicit_order: Option<OrderKey>,
    pub category: String,
    pub subcategory: Option<String>,
}

impl Photo {
    /// Creates a photo with only the mandatory attributes set.
    #[must_use]
    pub fn new(
        thumbnail_path: impl Into<String>,
        full_path: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            thumbnail_path: thumbnail_path.into(),
            full_path: full_path.into(),
            alt_text: None,
            description: None,
            capture_date: None,
            explicit_order: None,
            category: category.into(),
            subcategory: None,
        }
    }

    #[must_use]
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: i64) -> Self {
        self.explicit_order = Some(OrderKey::from(order));
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: &str) -> Self {
        self.capture_date = Some(CaptureDate::parse(date));
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt_text = Some(alt.into());
        self
    }

    /// Last path component of the full-resolution reference.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.full_path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.full_path)
    }

    /// File name without its extension.
    #[must_use]
    pub fn file_stem(&self) -> &str {
        let name = self.file_name();
        match name.rfind('.') {
            Some(idx) if idx > 0 => &name[..idx],
            _ => name,
        }
    }

    /// Alt text for the tile, derived from category and file name when absent.
    #[must_use]
    pub fn alt_or_default(&self) -> String {
        match &self.alt_text {
            Some(alt) => alt.clone(),
            None => format!("{} {}", self.category, self.file_stem()),
        }
    }

    /// Returns `true` if the photo sits directly under its category.
    #[must_use]
    pub fn is_top_level(&self) -> bool {
        self.subcategory.is_none()
    }

    #[must_use]
    pub fn is_in(&self, category: &str, subcategory: Option<&str>) -> bool {
        self.category == category && self.subcategory.as_deref() == subcategory
    }
}

// =============================================================================
// Category metadata
// =============================================================================

/// Descriptive metadata for a subcategory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcategoryMeta {
    pub description: Option<String>,
    /// Position among sibling subcategories, [`UNORDERED`] when not declared.
    pub display_order: OrderKey,
}

impl Default for SubcategoryMeta {
    fn default() -> Self {
        Self {
            description: None,
            display_order: UNORDERED,
        }
    }
}

/// Descriptive metadata for a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMeta {
    pub description: Option<String>,
    /// Position among categories, [`UNORDERED`] when not declared.
    pub display_order: OrderKey,
    pub subcategories: BTreeMap<String, SubcategoryMeta>,
}

impl Default for CategoryMeta {
    fn default() -> Self {
        Self {
            description: None,
            display_order: UNORDERED,
            subcategories: BTreeMap::new(),
        }
    }
}

/// Category metadata block keyed by category name.
pub type CategoryMetadata = BTreeMap<String, CategoryMeta>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_date_parses_iso_day() {
        let date = CaptureDate::parse("2024-01-31");
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2024, 1, 31));
        assert_eq!(date.raw(), "2024-01-31");
    }

    #[test]
    fn capture_date_parses_timestamp_and_month_forms() {
        assert_eq!(
            CaptureDate::parse("2023-06-02T10:15:00Z").date(),
            NaiveDate::from_ymd_opt(2023, 6, 2)
        );
        assert_eq!(
            CaptureDate::parse("2023-06").date(),
            NaiveDate::from_ymd_opt(2023, 6, 1)
        );
        assert_eq!(
            CaptureDate::parse("October 2025").date(),
            NaiveDate::from_ymd_opt(2025, 10, 1)
        );
    }

    #[test]
    fn capture_date_keeps_unparsable_text() {
        let date = CaptureDate::parse("summer, probably");
        assert!(date.date().is_none());
        assert_eq!(date.raw(), "summer, probably");
    }

    #[test]
    fn order_key_compares_fractions_and_integers() {
        let half = OrderKey::new(1.5).expect("finite");
        assert!(OrderKey::from(1) < half);
        assert!(half < OrderKey::from(2));
        assert_eq!(OrderKey::new(-0.0), OrderKey::new(0.0));
        assert!(OrderKey::from(i64::MAX) < UNORDERED);
    }

    #[test]
    fn order_key_rejects_non_finite_values() {
        assert!(OrderKey::new(f64::NAN).is_none());
        assert!(OrderKey::new(f64::INFINITY).is_none());
    }

    #[test]
    fn file_name_and_stem_come_from_full_path() {
        let photo = Photo::new("t/a-thumb.jpg", "photos/kazan/img-10.jpeg", "kazan");
        assert_eq!(photo.file_name(), "img-10.jpeg");
        assert_eq!(photo.file_stem(), "img-10");
    }

    #[test]
    fn alt_defaults_to_category_and_stem() {
        let photo = Photo::new("t.jpg", "photos/other/hands.jpg", "other");
        assert_eq!(photo.alt_or_default(), "other hands");
        assert_eq!(photo.with_alt("Hands").alt_or_default(), "Hands");
    }

    #[test]
    fn is_in_matches_category_and_subcategory() {
        let photo = Photo::new("t.jpg", "f.jpg", "other").with_subcategory("irbis");
        assert!(photo.is_in("other", Some("irbis")));
        assert!(!photo.is_in("other", None));
        assert!(!photo.is_top_level());
    }
}
