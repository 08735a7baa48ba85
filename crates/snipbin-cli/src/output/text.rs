//! Text output for visibility listings.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use snipbin_core::storage::SnippetSummary;

use crate::helpers::OutputFormat;

fn burn_label(summary: &SnippetSummary) -> String {
    summary
        .burn_at
        .map(|burn_at| burn_at.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "never".to_string())
}

pub fn print_summaries(summaries: &[SnippetSummary], format: OutputFormat, quiet: bool) {
    match format {
        OutputFormat::Table => {
            if summaries.is_empty() {
                if !quiet {
                    println!("No visible snippets.");
                }
                return;
            }
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL_CONDENSED)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["URL", "CREATED", "BURNS"]);
            for summary in summaries {
                table.add_row(vec![
                    summary.url.clone(),
                    summary.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
                    burn_label(summary),
                ]);
            }
            println!("{}", table);
        }
        OutputFormat::Plain => {
            for summary in summaries {
                println!(
                    "{} {} {}",
                    summary.url,
                    summary.created_at.to_rfc3339(),
                    summary
                        .burn_at
                        .map(|burn_at| burn_at.to_rfc3339())
                        .unwrap_or_else(|| "-".to_string())
                );
            }
        }
    }
}
