// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! An explicit directory wins, then `--config-dir`, then
//! `GALLERY_LENS_CONFIG_DIR`, then `GalleryLens` under the platform config
//! directory.

use std::path::PathBuf;
use std::sync::OnceLock;

const SETTINGS_DIR_NAME: &str = "GalleryLens";

pub const ENV_CONFIG_DIR: &str = "GALLERY_LENS_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument. Later calls are ignored.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        log::warn!("--config-dir already recorded, ignoring");
    }
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
}

/// Settings directory, `None` when the platform has no config directory and
/// nothing overrides it.
pub fn settings_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .or_else(|| CLI_CONFIG_DIR.get().cloned().flatten())
        .or_else(env_config_dir)
        .or_else(|| dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME)))
}
