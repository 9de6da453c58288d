//! Prompt size estimation and the pre-flight context guard for pls.
//!
//! The estimate is a fixed characters-per-token heuristic, not a real
//! tokenizer: the guard only has to catch prompts that are wildly oversized
//! for the target model before an external process is spawned.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::constants::{APPROX_CHARS_PER_TOKEN, CONTEXT_SAFE_RATIO, DEFAULT_CONTEXT_WINDOW};

static CONTEXT_WINDOWS: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for info in crate::models::OLLAMA_MODELS
        .iter()
        .chain(crate::models::CLAUDE_MODELS.iter())
    {
        m.insert(info.name, info.context_window);
    }
    m
});

/// How a model's context limit was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitSource {
    /// The full model name is in the registry.
    Exact,
    /// The family portion before the `:` tag is in the registry.
    Family,
    /// Unknown model, conservative fallback.
    Fallback,
}

/// Resolve the context limit for a model.
///
/// Lookup order: exact name, then the family portion of the name before a
/// `:` tag, then [`DEFAULT_CONTEXT_WINDOW`]. `llama3.1:42b` resolves through
/// the `llama3.1` entry even though that exact tag is unlisted.
pub fn resolve_context_limit(model: &str) -> (usize, LimitSource) {
    if let Some(&limit) = CONTEXT_WINDOWS.get(model) {
        return (limit, LimitSource::Exact);
    }
    let family = model.split(':').next().unwrap_or(model);
    if let Some(&limit) = CONTEXT_WINDOWS.get(family) {
        return (limit, LimitSource::Family);
    }
    (DEFAULT_CONTEXT_WINDOW, LimitSource::Fallback)
}

/// Rough token estimate for a prompt (~4 characters per token).
pub fn estimate_tokens(prompt: &str) -> usize {
    prompt.len() / APPROX_CHARS_PER_TOKEN
}

/// Outcome of the prompt-size guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptCheck {
    /// Comfortably inside the context window.
    Ok,
    /// Over the safe threshold but under the hard limit; proceed with a warning.
    Warning {
        estimated: usize,
        limit: usize,
        safe_limit: usize,
    },
    /// Over the hard limit; do not spawn the runner.
    TooLarge { estimated: usize, limit: usize },
}

/// Check an expanded prompt against a model's context window.
///
/// Pure function of (prompt length, model). The hard limit is the resolved
/// context window; the warning threshold is 80% of it.
pub fn check_prompt_size(prompt: &str, model: &str) -> (PromptCheck, LimitSource) {
    let estimated = estimate_tokens(prompt);
    let (limit, source) = resolve_context_limit(model);
    let safe_limit = (limit as f64 * CONTEXT_SAFE_RATIO) as usize;

    let check = if estimated > limit {
        PromptCheck::TooLarge { estimated, limit }
    } else if estimated > safe_limit {
        PromptCheck::Warning {
            estimated,
            limit,
            safe_limit,
        }
    } else {
        PromptCheck::Ok
    };
    (check, source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_lookup() {
        assert_eq!(
            resolve_context_limit("mixtral:8x7b"),
            (32_768, LimitSource::Exact)
        );
    }

    #[test]
    fn family_lookup_for_unlisted_tag() {
        // The :42b tag is not in the registry; the llama3.1 family entry is.
        assert_eq!(
            resolve_context_limit("llama3.1:42b"),
            (128_000, LimitSource::Family)
        );
    }

    #[test]
    fn unknown_model_falls_back() {
        assert_eq!(
            resolve_context_limit("some-model-nobody-has"),
            (DEFAULT_CONTEXT_WINDOW, LimitSource::Fallback)
        );
    }

    #[test]
    fn oversized_prompt_is_refused() {
        // 20,000 chars ≈ 5,000 tokens against phi3's 4,096 window.
        let prompt = "x".repeat(20_000);
        let (check, _) = check_prompt_size(&prompt, "phi3");
        assert_eq!(
            check,
            PromptCheck::TooLarge {
                estimated: 5_000,
                limit: 4_096,
            }
        );
    }

    #[test]
    fn large_prompt_warns_but_proceeds() {
        // 14,000 chars ≈ 3,500 tokens: under 4,096 but over the 80% mark.
        let prompt = "x".repeat(14_000);
        let (check, _) = check_prompt_size(&prompt, "phi3");
        assert_eq!(
            check,
            PromptCheck::Warning {
                estimated: 3_500,
                limit: 4_096,
                safe_limit: 3_276,
            }
        );
    }

    #[test]
    fn moderate_prompt_is_under_the_warn_band() {
        // 10,000 chars ≈ 2,500 tokens: below 80% of 4,096, no warning.
        let prompt = "x".repeat(10_000);
        let (check, _) = check_prompt_size(&prompt, "phi3");
        assert_eq!(check, PromptCheck::Ok);
    }

    #[test]
    fn small_prompt_is_ok() {
        let (check, _) = check_prompt_size("hello", "llama3");
        assert_eq!(check, PromptCheck::Ok);
    }
}
