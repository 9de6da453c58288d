//! Path resolution for the pls alias store.

use std::path::PathBuf;

use anyhow::Result;

/// Filesystem locations the store reads and writes.
///
/// Carried as a value rather than recomputed, so handlers and tests decide
/// where the store lives.
#[derive(Debug, Clone)]
pub struct StorePaths {
    /// Directory holding the user prompts file.
    pub config_dir: PathBuf,
}

impl StorePaths {
    /// Resolve the platform config directory for pls.
    ///
    /// Returns `~/.config/pls/` on Linux (`XDG_CONFIG_HOME/pls`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform's config directory cannot be
    /// determined.
    pub fn resolve() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join(crate::constants::APP_NAME);
        Ok(Self { config_dir })
    }

    /// Full path to the user prompts file.
    pub fn user_prompts_file(&self) -> PathBuf {
        self.config_dir
            .join(crate::constants::USER_PROMPTS_FILENAME)
    }
}
