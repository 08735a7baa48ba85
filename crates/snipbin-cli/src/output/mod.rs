//! Output formatting helpers for the CLI.

mod json;
mod text;

pub use json::{opened_json, summaries_json};
pub use text::print_summaries;
