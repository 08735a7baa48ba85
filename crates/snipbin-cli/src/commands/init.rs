use std::path::PathBuf;

use snipbin_core::storage::{SnippetStore, SqliteSnippetStore};
use snipbin_core::{ExpiryPolicy, SnipError};

use crate::app::{resolve_config_path, AppContext};
use crate::cli::{Cli, InitArgs};
use crate::config::{default_store_path, write_config, SnipbinConfig};
use crate::errors::CliError;

pub fn handle_init(ctx: &AppContext, cli: &Cli, args: &InitArgs) -> anyhow::Result<()> {
    let target = match args.path.as_ref().or(cli.store.as_ref()) {
        Some(path) => PathBuf::from(path),
        None => default_store_path()?,
    };

    let policy = match args.expiry_policy.as_deref() {
        Some(value) => value
            .parse::<ExpiryPolicy>()
            .map_err(|e| CliError::invalid_input(e.to_string()))?,
        None => ExpiryPolicy::default(),
    };

    let config_path = match args.config_path.as_ref() {
        Some(path) => PathBuf::from(path),
        None => resolve_config_path()?,
    };

    match SqliteSnippetStore::init(&target) {
        Ok(()) => {}
        Err(SnipError::StoreExists(_)) => {
            return Err(CliError::invalid_input(format!(
                "Snippet store already exists: {}\nHint: Pass a different path or use the existing store with --store.",
                target.display()
            ))
            .into());
        }
        Err(err) => return Err(err.into()),
    }

    let config = SnipbinConfig::new(target.clone(), policy);
    write_config(&config_path, &config)?;

    if !ctx.quiet() {
        println!("Initialized snippet store at {}", target.display());
        println!("Config written to {}", config_path.display());
        println!("Expiry policy: {}", policy);
    }

    Ok(())
}
