//! Shared terminal output helpers for pls.
//!
//! Small wrappers around [`colored`] so advisory notes and section rules
//! look the same everywhere. Model output itself is relayed verbatim.

use colored::Colorize;

use crate::constants::RULE_WIDTH;

/// Print a dimmed horizontal rule separating runner output from chrome.
pub fn rule() {
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
}

/// Print a dimmed advisory line, indented under the current action.
pub fn note(text: &str) {
    println!("{}", format!("   {}", text).dimmed());
}
