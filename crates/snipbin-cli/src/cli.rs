use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use snipbin_core::VERSION;

/// snipbin - Password-protected snippets with shareable ids and burn times
#[derive(Parser)]
#[command(name = "snipbin")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the snippet store
    #[arg(short, long, global = true, env = "SNIPBIN_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the store will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Expiry policy to record in the config (clock, creation_relative)
    #[arg(long, value_name = "POLICY")]
    pub expiry_policy: Option<String>,

    /// Config path override
    #[arg(long)]
    pub config_path: Option<String>,
}

/// Arguments for the `create` command
#[derive(Args)]
pub struct CreateArgs {
    /// Snippet text (overrides --file and stdin)
    #[arg(long, conflicts_with = "file")]
    pub content: Option<String>,

    /// Read snippet text from a file
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,

    /// Password protecting the snippet
    #[arg(long, conflicts_with = "no_password")]
    pub password: Option<String>,

    /// Use the empty default password without prompting
    #[arg(long)]
    pub no_password: bool,

    /// Burn time (ISO-8601 or YYYY-MM-DD)
    #[arg(long, conflicts_with = "burn_in")]
    pub burn_at: Option<String>,

    /// Burn after a duration from now (e.g., "10m", "1d")
    #[arg(long)]
    pub burn_in: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `get` command
#[derive(Args)]
pub struct GetArgs {
    /// Snippet url
    #[arg(value_name = "URL")]
    pub url: String,

    /// Password to open the snippet with
    #[arg(long)]
    pub password: Option<String>,

    /// Print the stored opaque content without decrypting
    #[arg(long)]
    pub raw: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new snippet store
    Init(InitArgs),

    /// Encrypt and store a snippet, printing its url
    Create(CreateArgs),

    /// Fetch and decrypt a snippet by url
    #[command(alias = "show")]
    Get(GetArgs),

    /// List snippets that have not burned
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_burn_flags_conflict() {
        let result = Cli::try_parse_from([
            "snipbin",
            "create",
            "--burn-at",
            "2026-01-01",
            "--burn-in",
            "1d",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_show_alias_parses_as_get() {
        let cli = Cli::try_parse_from(["snipbin", "show", "abc123"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Get(ref args)) if args.url == "abc123"));
    }
}
