//! Loading, merging, and persistence for the pls alias store.

use std::fs;

use anyhow::{Context, Result};

use super::paths::StorePaths;
use super::types::{AliasEntry, AliasMap, AliasStore, RemoveOutcome};

/// Built-in prompt aliases shipped with the binary.
const DEFAULT_PROMPTS_YAML: &str = include_str!("../../default_prompts.yml");

impl AliasStore {
    /// Load the store: embedded defaults plus the user file, if present.
    pub fn load(paths: &StorePaths) -> Result<Self> {
        let defaults: AliasMap = serde_yaml::from_str(DEFAULT_PROMPTS_YAML)
            .context("Built-in default_prompts.yml is invalid")?;

        let user_file = paths.user_prompts_file();
        let user: AliasMap = if user_file.exists() {
            let contents = fs::read_to_string(&user_file)
                .with_context(|| format!("Failed to read prompts from {:?}", user_file))?;
            serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse prompts at {:?}", user_file))?
        } else {
            AliasMap::new()
        };

        Ok(Self {
            defaults,
            user,
            user_file,
        })
    }

    /// Look up an alias. User entries shadow built-ins with the same name.
    pub fn get(&self, name: &str) -> Option<&AliasEntry> {
        self.user.get(name).or_else(|| self.defaults.get(name))
    }

    /// The merged view, user entries winning per key.
    pub fn merged(&self) -> AliasMap {
        let mut merged = self.defaults.clone();
        merged.extend(self.user.clone());
        merged
    }

    /// Whether `name` is a user entry shadowing (or extending) the defaults.
    pub fn is_override(&self, name: &str) -> bool {
        self.user.contains_key(name)
    }

    /// Add or replace a user alias and persist immediately.
    pub fn add(&mut self, name: &str, entry: AliasEntry) -> Result<()> {
        self.user.insert(name.to_string(), entry);
        self.save()
    }

    /// Remove a user alias and persist immediately.
    ///
    /// Only the user set is ever touched: removing an override makes the
    /// shadowed built-in visible again, and built-in-only names are refused.
    pub fn remove(&mut self, name: &str) -> Result<RemoveOutcome> {
        if self.user.remove(name).is_some() {
            self.save()?;
            return Ok(RemoveOutcome::Removed);
        }
        if self.defaults.contains_key(name) {
            return Ok(RemoveOutcome::BuiltIn);
        }
        Ok(RemoveOutcome::NotFound)
    }

    /// Rewrite the user prompts file in full.
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.user_file.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }
        let yaml = serde_yaml::to_string(&self.user).context("Failed to serialize prompts")?;
        fs::write(&self.user_file, yaml)
            .with_context(|| format!("Failed to write prompts to {:?}", self.user_file))?;
        Ok(())
    }
}
