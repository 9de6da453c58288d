//! Runner kind enumeration and command construction.
//!
//! The target model identifier decides which external executable performs
//! inference. Resolution happens once per invocation; everything downstream
//! matches on the enum instead of re-inspecting the model string.

use crate::constants::{
    CLAUDE_MODEL_MARKER, CLAUDE_PROGRAM, OLLAMA_HIDE_THINKING_FLAG, OLLAMA_PROGRAM,
};

/// Identifies which external runner executes the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerKind {
    /// Local model runner (`ollama run <model> <prompt>`).
    Ollama,
    /// Hosted assistant CLI (`claude -p <prompt>`).
    Claude,
}

impl RunnerKind {
    /// Route a model identifier to its runner.
    ///
    /// Models whose name contains the hosted marker (case-insensitive) go to
    /// the assistant CLI; everything else is assumed local.
    pub fn for_model(model: &str) -> Self {
        if model.to_lowercase().contains(CLAUDE_MODEL_MARKER) {
            Self::Claude
        } else {
            Self::Ollama
        }
    }

    /// The executable to spawn.
    pub fn program(&self) -> &'static str {
        match self {
            Self::Ollama => OLLAMA_PROGRAM,
            Self::Claude => CLAUDE_PROGRAM,
        }
    }

    /// Argument list for the runner invocation.
    ///
    /// `hide_thinking` only applies to the local runner; the hosted CLI does
    /// not take the flag.
    pub fn build_args(&self, model: &str, prompt: &str, hide_thinking: bool) -> Vec<String> {
        match self {
            Self::Ollama => {
                let mut args = vec!["run".to_string(), model.to_string()];
                if hide_thinking {
                    args.push(OLLAMA_HIDE_THINKING_FLAG.to_string());
                }
                args.push(prompt.to_string());
                args
            }
            Self::Claude => vec!["-p".to_string(), prompt.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claude_models_route_to_the_hosted_cli() {
        assert_eq!(RunnerKind::for_model("claude-sonnet-4-5"), RunnerKind::Claude);
        assert_eq!(RunnerKind::for_model("CLAUDE"), RunnerKind::Claude);
    }

    #[test]
    fn everything_else_routes_to_ollama() {
        assert_eq!(RunnerKind::for_model("llama3.2"), RunnerKind::Ollama);
        assert_eq!(RunnerKind::for_model("mixtral:8x7b"), RunnerKind::Ollama);
    }

    #[test]
    fn ollama_args_wrap_run() {
        let args = RunnerKind::Ollama.build_args("llama3", "hello", false);
        assert_eq!(args, vec!["run", "llama3", "hello"]);
    }

    #[test]
    fn ollama_args_with_hidden_thinking() {
        let args = RunnerKind::Ollama.build_args("llama3", "hello", true);
        assert_eq!(args, vec!["run", "llama3", "--hidethinking", "hello"]);
    }

    #[test]
    fn claude_args_use_print_mode() {
        let args = RunnerKind::Claude.build_args("claude", "hello", true);
        assert_eq!(args, vec!["-p", "hello"]);
    }
}
