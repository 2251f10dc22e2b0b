// SPDX-License-Identifier: MPL-2.0
//! Photo domain types.
//!
//! This module contains the photo record and the category metadata that
//! describe the gallery, independent of how they were loaded.

pub mod types;

// Re-export commonly used types
pub use types::{
    CaptureDate, CategoryMeta, CategoryMetadata, OrderKey, Photo, SubcategoryMeta,
    DEFAULT_CATEGORY, UNORDERED,
};
