//! Struct definitions for the pls alias store.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A stored prompt alias: target model, prompt template, optional blurb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    /// Model identifier the prompt is sent to (e.g. `"llama3.2"`).
    pub model: String,
    /// Prompt template, possibly containing `$(command)` substitutions.
    pub prompt: String,
    /// One-line description shown by `pls list`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Alias name to entry. A BTreeMap keeps listings in stable order.
pub type AliasMap = BTreeMap<String, AliasEntry>;

/// In-memory alias store: built-in defaults plus user overrides.
///
/// Constructed via [`AliasStore::load`]; mutations write the user map back
/// to disk immediately (full-file rewrite, never an append).
pub struct AliasStore {
    pub(super) defaults: AliasMap,
    pub(super) user: AliasMap,
    pub(super) user_file: PathBuf,
}

/// Result of a remove operation on the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// A user entry was deleted (a shadowed built-in may now show through).
    Removed,
    /// The name only exists as a built-in; nothing was deleted.
    BuiltIn,
    /// No alias by that name anywhere.
    NotFound,
}
