use std::io::IsTerminal;

use snipbin_core::input::{GetSnippetInput, SnippetView};
use snipbin_core::storage::SnippetStore;
use snipbin_core::SnipError;

use crate::app::{open_with_retry, AppContext};
use crate::cli::GetArgs;
use crate::errors::CliError;
use crate::output::opened_json;

pub fn handle_get(ctx: &AppContext, args: &GetArgs) -> anyhow::Result<()> {
    let request =
        GetSnippetInput::new(args.url.as_str()).map_err(|e| CliError::invalid_input(e.to_string()))?;

    let store = ctx.open_store()?;
    let snippet = match store.get(&request.url) {
        Ok(snippet) => snippet,
        Err(err @ (SnipError::SnippetNotFound(_) | SnipError::SnippetBurned(_))) => {
            return Err(CliError::not_found(
                err.to_string(),
                "Hint: Check the url, or run `snipbin list` to see visible snippets.",
            )
            .into());
        }
        Err(err) => return Err(err.into()),
    };
    let view = SnippetView::from(snippet);

    if args.raw {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&opened_json(&view, None))?);
        } else {
            println!("{}", view.content);
        }
        return Ok(());
    }

    let interactive = std::io::stdin().is_terminal() && !args.no_input;
    let plaintext = open_with_retry(&view.content, args.password.as_deref(), interactive)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&opened_json(&view, Some(&plaintext)))?
        );
        return Ok(());
    }

    if !ctx.quiet() {
        eprintln!(
            "Created {}",
            view.created_at.format("%Y-%m-%d %H:%M UTC")
        );
    }
    print!("{}", plaintext);
    if !plaintext.ends_with('\n') {
        println!();
    }

    Ok(())
}
