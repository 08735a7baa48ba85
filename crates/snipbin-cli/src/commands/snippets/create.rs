use std::io::IsTerminal;

use chrono::Utc;
use snipbin_core::crypto::{encrypt, DEFAULT_PASSWORD};
use snipbin_core::id::new_snippet_url;
use snipbin_core::input::CreateSnippetInput;
use snipbin_core::storage::SnippetStore;
use snipbin_core::SnipError;

use crate::app::{resolve_create_password, AppContext};
use crate::cli::CreateArgs;
use crate::errors::CliError;
use crate::helpers::{read_snippet_text, resolve_burn_at};

pub fn handle_create(ctx: &AppContext, args: &CreateArgs) -> anyhow::Result<()> {
    let text = read_snippet_text(args.content.clone(), args.file.as_deref(), args.no_input)?;
    let interactive = std::io::stdin().is_terminal() && !args.no_input;

    let default_burn_in = ctx.default_burn_in()?;
    let now = Utc::now();
    let burn_at = resolve_burn_at(
        args.burn_at.as_deref(),
        args.burn_in.as_deref(),
        default_burn_in.as_deref(),
        now,
    )
    .map_err(|e| CliError::invalid_input(e.to_string()))?;

    let mut store = ctx.open_store()?;
    let password =
        resolve_create_password(args.password.as_deref(), args.no_password, interactive)?;
    let content = encrypt(&text, &password)?;

    let input = CreateSnippetInput {
        url: new_snippet_url()?,
        content,
        burn_at,
    };
    let snippet = input.into_new_snippet().map_err(|e| match e {
        SnipError::Validation(message) => anyhow::Error::from(CliError::invalid_input(message)),
        other => anyhow::Error::from(other),
    })?;
    store.create(&snippet)?;

    if args.json {
        let output = serde_json::json!({
            "url": snippet.url,
            "burnAt": snippet.burn_at,
            "passwordProtected": password != DEFAULT_PASSWORD,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", snippet.url);
    if !ctx.quiet() {
        if let Some(burn_at) = snippet.burn_at {
            if burn_at <= now {
                eprintln!("Warning: burn time is already in the past");
            } else {
                eprintln!("Burns at {}", burn_at.format("%Y-%m-%d %H:%M UTC"));
            }
        }
        if password == DEFAULT_PASSWORD {
            eprintln!("Note: no password set; anyone with the url can read this snippet");
        }
    }

    Ok(())
}
