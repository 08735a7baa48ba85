//! Input and parsing helper functions for the CLI.

mod input;
mod parsing;

pub use input::read_snippet_text;
pub use parsing::{parse_output_format, resolve_burn_at, OutputFormat};
