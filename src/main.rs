//! Entry point for pls, an alias-driven prompt runner for the terminal.
//!
//! This binary parses CLI arguments via [`cli`] and dispatches to the
//! appropriate subcommand handler. Prompts are stored under short aliases,
//! expanded, size-checked, and handed to an external model runner whose
//! output streams back to the terminal.

mod cli;
mod constants;
mod expand;
mod models;
mod output;
mod runner;
mod store;
mod tokens;

use anyhow::Result;

/// Runs the pls CLI.
///
/// Parses command-line arguments into a [`cli::Cli`] struct and dispatches
/// the chosen subcommand via [`cli::run`]. Any error exits non-zero.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = cli::parse();
    cli::run(cli).await
}
