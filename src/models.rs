//! Centralized model registry for pls.
//!
//! Defines known models with their approximate context window sizes. This is
//! the single source of truth consumed by `tokens.rs` for the prompt-size
//! guard. Entries are approximate and deliberately conservative.

/// Information about a known model.
pub struct ModelInfo {
    /// The model identifier string (e.g., "llama3.1:8b").
    pub name: &'static str,
    /// Context window size in tokens.
    pub context_window: usize,
}

/// Common Ollama models with known context window sizes.
///
/// Tagged variants (`:7b`, `:70b`, ...) not listed here resolve through
/// their family entry (the part before the colon).
pub const OLLAMA_MODELS: &[ModelInfo] = &[
    ModelInfo {
        name: "llama2",
        context_window: 4_096,
    },
    ModelInfo {
        name: "llama2:7b",
        context_window: 4_096,
    },
    ModelInfo {
        name: "llama2:13b",
        context_window: 4_096,
    },
    ModelInfo {
        name: "llama2:70b",
        context_window: 4_096,
    },
    ModelInfo {
        name: "llama3",
        context_window: 8_192,
    },
    ModelInfo {
        name: "llama3:8b",
        context_window: 8_192,
    },
    ModelInfo {
        name: "llama3:70b",
        context_window: 8_192,
    },
    ModelInfo {
        name: "llama3.1",
        context_window: 128_000,
    },
    ModelInfo {
        name: "llama3.1:8b",
        context_window: 128_000,
    },
    ModelInfo {
        name: "llama3.1:70b",
        context_window: 128_000,
    },
    ModelInfo {
        name: "llama3.1:405b",
        context_window: 128_000,
    },
    ModelInfo {
        name: "llama3.2",
        context_window: 128_000,
    },
    ModelInfo {
        name: "llama3.2:1b",
        context_window: 128_000,
    },
    ModelInfo {
        name: "llama3.2:3b",
        context_window: 128_000,
    },
    ModelInfo {
        name: "codellama",
        context_window: 16_384,
    },
    ModelInfo {
        name: "codellama:7b",
        context_window: 16_384,
    },
    ModelInfo {
        name: "codellama:13b",
        context_window: 16_384,
    },
    ModelInfo {
        name: "codellama:34b",
        context_window: 16_384,
    },
    ModelInfo {
        name: "mistral",
        context_window: 8_192,
    },
    ModelInfo {
        name: "mistral:7b",
        context_window: 8_192,
    },
    ModelInfo {
        name: "mixtral",
        context_window: 32_768,
    },
    ModelInfo {
        name: "mixtral:8x7b",
        context_window: 32_768,
    },
    ModelInfo {
        name: "qwen",
        context_window: 8_192,
    },
    ModelInfo {
        name: "qwen:7b",
        context_window: 8_192,
    },
    ModelInfo {
        name: "qwen:14b",
        context_window: 8_192,
    },
    ModelInfo {
        name: "qwen:72b",
        context_window: 8_192,
    },
    // Conservative estimate
    ModelInfo {
        name: "gpt-oss:20b",
        context_window: 8_192,
    },
    ModelInfo {
        name: "gemma",
        context_window: 8_192,
    },
    ModelInfo {
        name: "gemma:2b",
        context_window: 8_192,
    },
    ModelInfo {
        name: "gemma:7b",
        context_window: 8_192,
    },
    ModelInfo {
        name: "phi3",
        context_window: 4_096,
    },
    ModelInfo {
        name: "phi3:mini",
        context_window: 4_096,
    },
    ModelInfo {
        name: "yi",
        context_window: 4_096,
    },
];

/// Hosted assistant models reachable through the claude CLI.
pub const CLAUDE_MODELS: &[ModelInfo] = &[
    ModelInfo {
        name: "claude",
        context_window: 200_000,
    },
    ModelInfo {
        name: "claude-sonnet-4-5",
        context_window: 200_000,
    },
    ModelInfo {
        name: "claude-haiku-4-5",
        context_window: 200_000,
    },
];
