//! Alias management handlers for pls.
//!
//! Handles listing, adding, and removing prompt aliases. Listings show the
//! merged view; mutations persist through the store immediately.

use anyhow::Result;
use colored::Colorize;

use crate::store::{AliasEntry, AliasStore, RemoveOutcome};

/// Print every alias in the merged view, overrides marked.
pub(crate) fn list(store: &AliasStore) {
    println!("Available prompt aliases:");
    for (name, entry) in store.merged() {
        let description = entry.description.as_deref().unwrap_or("No description");
        let marker = if store.is_override(&name) {
            format!(" {}", "(override)".dimmed())
        } else {
            String::new()
        };
        println!(
            "  {}: {} - {}{}",
            name.cyan(),
            entry.model.yellow(),
            description.dimmed(),
            marker
        );
    }
}

/// Add or replace a user alias.
pub(crate) fn add(
    store: &mut AliasStore,
    name: &str,
    model: &str,
    prompt: &str,
    description: Option<String>,
) -> Result<()> {
    store.add(
        name,
        AliasEntry {
            model: model.to_string(),
            prompt: prompt.to_string(),
            description,
        },
    )?;
    println!("Added alias '{}' for model '{}'", name.cyan(), model.yellow());
    Ok(())
}

/// Remove a user alias. Built-ins can only be shadowed, never removed.
pub(crate) fn remove(store: &mut AliasStore, name: &str) -> Result<()> {
    match store.remove(name)? {
        RemoveOutcome::Removed => {
            println!("Removed alias '{}'", name.cyan());
            Ok(())
        }
        RemoveOutcome::BuiltIn => anyhow::bail!(
            "'{}' is a built-in alias; shadow it with 'pls add' instead of removing it",
            name
        ),
        RemoveOutcome::NotFound => anyhow::bail!("Alias '{}' not found", name),
    }
}
