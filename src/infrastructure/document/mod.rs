// SPDX-License-Identifier: MPL-2.0
//! Document source adapters.
//!
//! [`source_for`] picks the adapter from the shape of the location: `http://`
//! and `https://` URLs are downloaded, anything else is read as a file path.

mod fs;
mod http;

pub use fs::FsDocumentSource;
pub use http::HttpDocumentSource;

use crate::application::port::{DocumentError, DocumentSource};
use crate::domain::ui::FetchTimeout;

/// Either of the concrete document sources.
#[derive(Debug, Clone)]
pub enum AnySource {
    File(FsDocumentSource),
    Http(HttpDocumentSource),
}

impl DocumentSource for AnySource {
    fn location(&self) -> &str {
        match self {
            AnySource::File(source) => source.location(),
            AnySource::Http(source) => source.location(),
        }
    }

    async fn fetch(&self) -> Result<String, DocumentError> {
        match self {
            AnySource::File(source) => source.fetch().await,
            AnySource::Http(source) => source.fetch().await,
        }
    }
}

/// Returns `true` if `location` is an HTTP(S) URL.
#[must_use]
pub fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Builds the source for `location`.
#[must_use]
pub fn source_for(location: &str, timeout: FetchTimeout) -> AnySource {
    if is_remote(location) {
        AnySource::Http(HttpDocumentSource::new(location.trim(), timeout))
    } else {
        AnySource::File(FsDocumentSource::new(location))
    }
}
