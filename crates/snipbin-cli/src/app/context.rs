//! Application context for the snipbin CLI.
//!
//! Combines CLI arguments with the lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use snipbin_core::storage::{SnippetStore, SqliteSnippetStore};
use snipbin_core::{ExpiryPolicy, SnipError};

use crate::cli::Cli;
use crate::config::{read_config, SnipbinConfig};
use crate::errors::CliError;

use super::resolver::{missing_config_message, missing_store_message, resolve_config_path};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<SnipbinConfig>>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file, if one exists. Loaded once.
    pub fn config(&self) -> anyhow::Result<Option<&SnipbinConfig>> {
        let loaded = self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if !path.exists() {
                tracing::debug!(path = %path.display(), "no config file");
                return Ok::<_, anyhow::Error>(None);
            }
            read_config(&path).map(Some)
        })?;
        Ok(loaded.as_ref())
    }

    /// Store path from --store / SNIPBIN_STORE, then the config file.
    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = self.cli.store.as_ref() {
            return Ok(PathBuf::from(path));
        }
        match self.config()? {
            Some(config) => Ok(PathBuf::from(&config.store.path)),
            None => Err(anyhow::anyhow!(missing_config_message(
                &resolve_config_path()?
            ))),
        }
    }

    pub fn expiry_policy(&self) -> anyhow::Result<ExpiryPolicy> {
        Ok(self
            .config()?
            .map(|config| config.expiry.policy)
            .unwrap_or_default())
    }

    pub fn default_burn_in(&self) -> anyhow::Result<Option<String>> {
        Ok(self
            .config()?
            .and_then(|config| config.expiry.default_burn_in.clone()))
    }

    /// Open the configured store with the configured expiry policy.
    pub fn open_store(&self) -> anyhow::Result<SqliteSnippetStore> {
        let path = self.store_path()?;
        let policy = self.expiry_policy()?;
        match SqliteSnippetStore::open(&path) {
            Ok(store) => {
                tracing::debug!(path = %path.display(), %policy, "opened snippet store");
                Ok(store.with_expiry_policy(policy))
            }
            Err(SnipError::StoreNotFound(_)) => Err(CliError::not_found(
                missing_store_message(&path),
                "Hint: Run `snipbin init` to create a store.",
            )
            .into()),
            Err(err) => Err(err.into()),
        }
    }
}
