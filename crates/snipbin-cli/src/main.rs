//! snipbin CLI - password-protected snippets with shareable ids
//!
//! The CLI is the client side of snipbin: it encrypts snippet text before
//! handing it to the store and decrypts it after lookup.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;

use clap::Parser;
use snipbin_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{init, misc, snippets};
use crate::errors::exit_code_for;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(exit_code_for(&e));
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => {
            init::handle_init(ctx, cli, args)?;
        }
        Some(Commands::Create(args)) => {
            snippets::handle_create(ctx, args)?;
        }
        Some(Commands::Get(args)) => {
            snippets::handle_get(ctx, args)?;
        }
        Some(Commands::List(args)) => {
            snippets::handle_list(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("snipbin v{}", VERSION);
            println!("\nQuickstart:");
            println!("  snipbin init");
            println!("  echo \"hello world\" | snipbin create --password secret");
            println!("  snipbin get <url> --password secret");
            println!("  snipbin list");
            println!("\nRun `snipbin --help` for full usage.");
        }
    }

    Ok(())
}
