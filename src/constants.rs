//! Centralized constants for pls.
//!
//! All magic numbers, default strings, and configuration constants live here
//! so they can be changed in one place.

/// Application name used in CLI output and directory paths.
pub const APP_NAME: &str = "pls";

/// User alias file, stored under the config directory.
pub const USER_PROMPTS_FILENAME: &str = "prompts.yml";

// --- Prompt size guard ---

/// Context window size for models not in the registry.
pub const DEFAULT_CONTEXT_WINDOW: usize = 4_096;

/// Fraction of the context window considered safe to fill (80%).
pub const CONTEXT_SAFE_RATIO: f64 = 0.80;

/// Crude character-to-token ratio used for the size estimate.
pub const APPROX_CHARS_PER_TOKEN: usize = 4;

// --- Runners ---

/// Local model runner executable.
pub const OLLAMA_PROGRAM: &str = "ollama";

/// Hosted assistant CLI executable.
pub const CLAUDE_PROGRAM: &str = "claude";

/// Model names containing this marker (case-insensitive) route to the
/// hosted assistant CLI instead of the local runner.
pub const CLAUDE_MODEL_MARKER: &str = "claude";

/// Flag passed to `ollama run` to suppress internal reasoning output.
pub const OLLAMA_HIDE_THINKING_FLAG: &str = "--hidethinking";

// --- Status display ---

/// Frames for the waiting indicator, drawn in order.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Redraw cadence for the waiting indicator.
pub const SPINNER_TICK_MS: u64 = 100;

/// Sampling cadence for the optional memory poller.
pub const MEM_POLL_INTERVAL_SECS: u64 = 2;

/// Width of the dimmed horizontal rules around runner output.
pub const RULE_WIDTH: usize = 60;
