//! Command-line interface definition and dispatch for pls.
//!
//! Uses [`clap`] for argument parsing with derive macros. Alias management
//! lives in the [`alias`] submodule; any first argument that is not a
//! recognized subcommand is treated as an alias to run.

mod alias;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::store::{AliasStore, StorePaths};
use crate::{expand, output, runner, tokens};

/// Top-level CLI structure for pls.
#[derive(Parser)]
#[command(
    name = "pls",
    about = "Please - Ollama prompt runner",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Hide the model's internal reasoning (local runner only)
    #[arg(long)]
    pub hide_thinking: bool,

    /// Periodically report the runner's memory usage
    #[arg(long)]
    pub mem: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for the pls CLI.
///
/// The `///` doc comments on variants double as `--help` text rendered by
/// clap.
#[derive(Subcommand)]
pub enum Commands {
    /// List available prompt aliases
    List,
    /// Add or replace a prompt alias
    Add {
        /// Alias name
        name: String,
        /// Target model identifier (e.g. llama3.2)
        model: String,
        /// Prompt template; $(command) markers run as shell commands
        prompt: String,
        /// One-line description shown by `pls list`
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Remove a user-defined prompt alias
    Remove {
        /// Alias name
        name: String,
    },
    /// Run a prompt alias, appending any extra words to the prompt
    #[command(external_subcommand)]
    Run(Vec<String>),
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid
/// input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Dispatches the parsed CLI command to its handler.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List => {
            let store = AliasStore::load(&StorePaths::resolve()?)?;
            alias::list(&store);
            Ok(())
        }
        Commands::Add {
            name,
            model,
            prompt,
            description,
        } => {
            let mut store = AliasStore::load(&StorePaths::resolve()?)?;
            alias::add(&mut store, &name, &model, &prompt, description)
        }
        Commands::Remove { name } => {
            let mut store = AliasStore::load(&StorePaths::resolve()?)?;
            alias::remove(&mut store, &name)
        }
        Commands::Run(words) => run_alias(words, cli.hide_thinking, cli.mem).await,
    }
}

/// Expand and run an aliased prompt.
async fn run_alias(words: Vec<String>, hide_thinking: bool, poll_memory: bool) -> Result<()> {
    let Some((name, extra)) = words.split_first() else {
        anyhow::bail!("No alias given. Usage: pls <alias> [extra words...]");
    };

    let store = AliasStore::load(&StorePaths::resolve()?)?;
    let Some(entry) = store.get(name) else {
        let names: Vec<String> = store.merged().keys().cloned().collect();
        output::note(&format!("Available aliases: {}", names.join(", ")));
        anyhow::bail!("No prompt found for alias '{}'", name);
    };

    let prompt = expand::expand_command_substitutions(&entry.prompt)?;
    let prompt = expand::append_extra_args(prompt, extra);

    check_guard(&prompt, &entry.model)?;

    let kind = runner::RunnerKind::for_model(&entry.model);
    runner::run(
        kind,
        &entry.model,
        &prompt,
        runner::RunOptions {
            hide_thinking,
            poll_memory,
        },
    )
    .await?;
    Ok(())
}

/// Print guard diagnostics and refuse oversized prompts before spawning.
fn check_guard(prompt: &str, model: &str) -> Result<()> {
    use tokens::{LimitSource, PromptCheck};

    let (check, source) = tokens::check_prompt_size(prompt, model);
    if source == LimitSource::Fallback {
        output::note(&format!("Warning: Unknown model '{}'", model));
        output::note(&format!(
            "Using conservative context limit: {} tokens",
            crate::constants::DEFAULT_CONTEXT_WINDOW
        ));
        println!();
    }

    match check {
        PromptCheck::Ok => Ok(()),
        PromptCheck::Warning {
            estimated,
            limit,
            safe_limit,
        } => {
            output::note(&format!("Warning: Prompt is large (~{} tokens)", estimated));
            output::note(&format!("Model '{}' context limit: {} tokens", model, limit));
            output::note(&format!(
                "Recommended max: {} tokens (80% of limit)",
                safe_limit
            ));
            output::note("Proceeding anyway... (may work but watch for truncation)");
            println!();
            Ok(())
        }
        PromptCheck::TooLarge { estimated, limit } => {
            anyhow::bail!(
                "Prompt (~{} tokens) exceeds model '{}' context limit of {} tokens",
                estimated,
                model,
                limit
            )
        }
    }
}
