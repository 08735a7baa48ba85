//! Path resolution for config and store files.

use std::path::{Path, PathBuf};

use crate::config::default_config_path;

/// Resolve the config file path, checking SNIPBIN_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("SNIPBIN_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Error message when the store file is missing.
pub fn missing_store_message(path: &Path) -> String {
    format!(
        "Snippet store not found: {}\n\nRun:\n  snipbin init\n\nOr specify a different path:\n  snipbin --store /path/to/snippets.db init",
        path.display()
    )
}

/// Error message when the config file is missing.
pub fn missing_config_message(config_path: &Path) -> String {
    format!(
        "Config file not found: {}\n\nRun:\n  snipbin init\n\nOr set SNIPBIN_STORE / pass --store to skip the config file.",
        config_path.display()
    )
}
