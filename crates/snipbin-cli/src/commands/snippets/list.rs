use snipbin_core::storage::SnippetStore;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::{parse_output_format, OutputFormat};
use crate::output::{print_summaries, summaries_json};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    if args.json && format.is_some() {
        return Err(anyhow::anyhow!("--format cannot be used with --json"));
    }

    let store = ctx.open_store()?;
    let summaries = store.list_visible()?;

    if args.json {
        let output = serde_json::to_string_pretty(&summaries_json(&summaries))?;
        println!("{}", output);
        return Ok(());
    }

    let format = format.unwrap_or(OutputFormat::Table);
    print_summaries(&summaries, format, ctx.quiet());

    if format == OutputFormat::Table && !ctx.quiet() {
        let stored = store.count()?;
        if stored > summaries.len() {
            eprintln!(
                "{} of {} stored snippets hidden by the {} expiry policy",
                stored - summaries.len(),
                stored,
                store.expiry_policy()
            );
        }
    }
    Ok(())
}
