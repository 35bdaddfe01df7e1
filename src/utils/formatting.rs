//! Formatting utilities used for CLI and export outputs.

use crate::utils::colors::{GREEN, GREY, RED, RESET};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// "Yes" in green, "No" in red.
pub fn colorize_yes_no(value: bool) -> String {
    if value {
        format!("{GREEN}{}{RESET}", yes_no(value))
    } else {
        format!("{RED}{}{RESET}", yes_no(value))
    }
}

/// Grey placeholder for absent values.
pub fn colorize_optional(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => format!("{GREY}-{RESET}"),
    }
}

/// First char of the configured separator, `-` when empty.
pub fn separator_char(ch: &str) -> char {
    ch.chars().next().unwrap_or('-')
}
