// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the [`DocumentSource`] port.

use crate::application::port::{DocumentError, DocumentSource};
use crate::domain::ui::FetchTimeout;

const USER_AGENT: &str = concat!("GalleryLens/", env!("CARGO_PKG_VERSION"));

/// Downloads the gallery document over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpDocumentSource {
    url: String,
    timeout: FetchTimeout,
}

impl HttpDocumentSource {
    #[must_use]
    pub fn new(url: impl Into<String>, timeout: FetchTimeout) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    #[must_use]
    pub fn timeout(&self) -> FetchTimeout {
        self.timeout
    }

    fn client(&self) -> Result<reqwest::Client, DocumentError> {
        reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(self.timeout.as_duration())
            .build()
            .map_err(|e| DocumentError::Network(e.to_string()))
    }
}

impl DocumentSource for HttpDocumentSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<String, DocumentError> {
        let response = self
            .client()?
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DocumentError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DocumentError::NotFound(self.url.clone()));
        }
        if !status.is_success() {
            return Err(DocumentError::HttpStatus(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| DocumentError::Network(e.to_string()))
    }
}
