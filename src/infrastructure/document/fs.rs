// SPDX-License-Identifier: MPL-2.0
//! Local file adapter for the [`DocumentSource`] port.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::application::port::{DocumentError, DocumentSource};

/// Reads the gallery document from the local filesystem.
#[derive(Debug, Clone)]
pub struct FsDocumentSource {
    path: PathBuf,
    location: String,
}

impl FsDocumentSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for FsDocumentSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self) -> Result<String, DocumentError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => DocumentError::NotFound(self.location.clone()),
                _ => DocumentError::IoError(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn reads_existing_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("photos_data.json");
        std::fs::write(&path, "[]").expect("write document");

        let source = FsDocumentSource::new(&path);
        assert_eq!(source.fetch().await.expect("read"), "[]");
        assert_eq!(source.path(), path.as_path());
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempdir().expect("temp dir");
        let source = FsDocumentSource::new(dir.path().join("missing.json"));
        assert!(matches!(
            source.fetch().await,
            Err(DocumentError::NotFound(location)) if location.ends_with("missing.json")
        ));
    }

    #[tokio::test]
    async fn directory_is_io_error() {
        let dir = tempdir().expect("temp dir");
        let source = FsDocumentSource::new(dir.path());
        assert!(matches!(source.fetch().await, Err(DocumentError::IoError(_))));
    }
}
