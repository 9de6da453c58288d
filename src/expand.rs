//! Prompt template expansion for pls.
//!
//! Stored prompts may contain `$(command)` markers which are replaced with
//! the captured output of running that text through `sh -c`. This is
//! deliberate and security-sensitive: the alias files are a trust boundary,
//! since anything written into them runs as a shell command on expansion.

use std::process::Command;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

static SUBSTITUTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\(([^)]+)\)").expect("substitution regex is valid"));

/// Replace every `$(command)` occurrence with the command's trimmed stdout.
///
/// Surrounding text is preserved verbatim. A command that exits non-zero
/// still substitutes whatever stdout it produced; only a shell that cannot
/// be spawned at all is an error.
pub fn expand_command_substitutions(prompt: &str) -> Result<String> {
    let mut expanded = String::with_capacity(prompt.len());
    let mut last = 0;

    for caps in SUBSTITUTION.captures_iter(prompt) {
        let m = caps.get(0).expect("capture 0 always present");
        let command = &caps[1];

        let output = Command::new("sh")
            .arg("-c")
            .arg(command)
            .output()
            .with_context(|| format!("Failed to run substitution command '{}'", command))?;

        expanded.push_str(&prompt[last..m.start()]);
        expanded.push_str(String::from_utf8_lossy(&output.stdout).trim());
        last = m.end();
    }
    expanded.push_str(&prompt[last..]);

    Ok(expanded)
}

/// Append extra command-line words to an expanded prompt as trailing
/// free text, separated by a blank line. No-op for an empty list.
pub fn append_extra_args(prompt: String, args: &[String]) -> String {
    if args.is_empty() {
        return prompt;
    }
    format!("{}\n\n{}", prompt, args.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_command_output() {
        let expanded = expand_command_substitutions("say $(echo hi) please").unwrap();
        assert_eq!(expanded, "say hi please");
    }

    #[test]
    fn substitutes_multiple_occurrences() {
        let expanded = expand_command_substitutions("$(echo a)-$(echo b)").unwrap();
        assert_eq!(expanded, "a-b");
    }

    #[test]
    fn plain_text_passes_through() {
        let expanded = expand_command_substitutions("no markers here").unwrap();
        assert_eq!(expanded, "no markers here");
    }

    #[test]
    fn failed_command_substitutes_its_stdout() {
        // Non-zero exit is not an error; stdout (empty here) still lands.
        let expanded = expand_command_substitutions("x$(false)y").unwrap();
        assert_eq!(expanded, "xy");
    }

    #[test]
    fn appends_extra_args_after_blank_line() {
        let prompt = append_extra_args(
            "base prompt".to_string(),
            &["and".to_string(), "more".to_string()],
        );
        assert_eq!(prompt, "base prompt\n\nand more");
    }

    #[test]
    fn no_extra_args_leaves_prompt_alone() {
        assert_eq!(append_extra_args("p".to_string(), &[]), "p");
    }
}
