use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use snipbin_core::fs::write_atomic;
use snipbin_core::ExpiryPolicy;

#[derive(Debug, Serialize, Deserialize)]
pub struct SnipbinConfig {
    pub store: StoreSection,
    #[serde(default)]
    pub expiry: ExpirySection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreSection {
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ExpirySection {
    #[serde(default)]
    pub policy: ExpiryPolicy,
    /// Applied by `create` when neither --burn-at nor --burn-in is given
    pub default_burn_in: Option<String>,
}

impl SnipbinConfig {
    pub fn new(store_path: PathBuf, policy: ExpiryPolicy) -> Self {
        Self {
            store: StoreSection {
                path: store_path.to_string_lossy().to_string(),
            },
            expiry: ExpirySection {
                policy,
                default_burn_in: None,
            },
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_store_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("snippets.db"))
}

pub fn read_config(path: &Path) -> anyhow::Result<SnipbinConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &SnipbinConfig) -> anyhow::Result<()> {
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    write_atomic(path, contents.as_bytes())
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("snipbin"));
        }
    }
    Ok(home_dir()?.join(".config").join("snipbin"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("snipbin"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("snipbin"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
