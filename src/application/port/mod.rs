// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//!
//! # Available Ports
//!
//! - [`document`]: Fetching the gallery document
//!
//! # Example
//!
//! ```ignore
//! use gallery_lens::application::port::DocumentSource;
//!
//! async fn byte_len(source: &impl DocumentSource) -> usize {
//!     source.fetch().await.map(|text| text.len()).unwrap_or(0)
//! }
//! ```

pub mod document;

// Re-export main types for convenience
pub use document::{DocumentError, DocumentSource};
