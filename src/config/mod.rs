// SPDX-License-Identifier: MPL-2.0
//! Gallery settings, persisted in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[gallery]` - Pagination
//! - `[taxonomy]` - Preferred category and subcategory order
//! - `[source]` - Default document location and fetch timeout
//!
//! ```toml
//! [gallery]
//! page_size = 20
//!
//! [taxonomy]
//! categories = ["kazan", "peterburg", "other"]
//!
//! [taxonomy.subcategories]
//! other = ["irbis", "sochi"]
//!
//! [source]
//! document = "photos_data.json"
//! timeout_secs = 30
//! ```
//!
//! # Path Resolution
//!
//! The file lives in the directory returned by
//! [`paths::settings_dir`](crate::app::paths::settings_dir).
//! Tests use [`load_from_path`]/[`save_to_path`] with an explicit path.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::taxonomy::TaxonomyOrder;
use crate::domain::ui::{FetchTimeout, PageSize};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Grid settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Photos revealed per "load more" step.
    #[serde(default = "default_page_size", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Preferred display order for documents without category metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TaxonomyConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,

    /// Subcategory order, keyed by category name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub subcategories: BTreeMap<String, Vec<String>>,
}

/// Where the gallery document comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceConfig {
    /// File path or HTTP(S) URL.
    #[serde(default = "default_document", skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,

    #[serde(default = "default_timeout_secs", skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u32>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            document: default_document(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub taxonomy: TaxonomyConfig,

    #[serde(default)]
    pub source: SourceConfig,
}

impl Config {
    /// Page size, clamped to the valid range.
    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.gallery
            .page_size
            .map_or_else(PageSize::default, PageSize::new)
    }

    /// Fetch timeout, clamped to the valid range.
    #[must_use]
    pub fn fetch_timeout(&self) -> FetchTimeout {
        self.source
            .timeout_secs
            .map_or_else(FetchTimeout::default, FetchTimeout::new)
    }

    /// Default document location.
    #[must_use]
    pub fn document(&self) -> &str {
        self.source
            .document
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(DEFAULT_DOCUMENT)
    }

    #[must_use]
    pub fn to_taxonomy_order(&self) -> TaxonomyOrder {
        TaxonomyOrder {
            categories: self.taxonomy.categories.clone(),
            subcategories: self.taxonomy.subcategories.clone(),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_page_size() -> Option<usize> {
    Some(DEFAULT_PAGE_SIZE)
}

fn default_document() -> Option<String> {
    Some(DEFAULT_DOCUMENT.to_string())
}

fn default_timeout_secs() -> Option<u32> {
    Some(DEFAULT_TIMEOUT_SECS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::settings_dir(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If the file exists but
/// cannot be read, returns the default config with a warning explaining what
/// went wrong. A missing file is not an error.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some(format!("could not load {}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`] if
/// it is not valid TOML for this format.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
