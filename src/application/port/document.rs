// SPDX-License-Identifier: MPL-2.0
//! Gallery document loading port.
//!
//! This module defines the [`DocumentSource`] trait for fetching the gallery
//! document. Infrastructure adapters implement it for local files and for
//! HTTP locations.

use std::fmt;
use std::future::Future;

// =============================================================================
// DocumentError
// =============================================================================

/// Errors that can occur while fetching the gallery document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The document does not exist at the given location.
    NotFound(String),

    /// The document could not be read (I/O error).
    IoError(String),

    /// The server answered with a non-success status.
    HttpStatus(u16),

    /// The request failed before a response was received.
    Network(String),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::NotFound(location) => write!(f, "Document not found: {location}"),
            DocumentError::IoError(msg) => write!(f, "I/O error: {msg}"),
            DocumentError::HttpStatus(status) => write!(f, "HTTP status: {status}"),
            DocumentError::Network(msg) => write!(f, "Network error: {msg}"),
        }
    }
}

impl std::error::Error for DocumentError {}

// =============================================================================
// DocumentSource
// =============================================================================

/// Source of the gallery document.
///
/// The gallery loads its document exactly once, at startup. Implementations
/// return the raw text; parsing happens in [`crate::document`].
pub trait DocumentSource: Send + Sync {
    /// Human-readable location, used in log messages.
    fn location(&self) -> &str;

    /// Fetches the document text.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentError`] if the document cannot be retrieved.
    fn fetch(&self) -> impl Future<Output = Result<String, DocumentError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_http_status() {
        assert_eq!(DocumentError::HttpStatus(404).to_string(), "HTTP status: 404");
    }

    #[test]
    fn display_formats_not_found() {
        let err = DocumentError::NotFound("photos_data.json".into());
        assert_eq!(err.to_string(), "Document not found: photos_data.json");
    }
}
