//! CLI color helpers.
//!
//! Every function respects `NO_COLOR`, `FORCE_COLOR` and TTY detection via
//! `owo-colors`' `if_supports_color()`.

use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

// Slate blue: ids, accents
const SLATE: (u8, u8, u8) = (122, 162, 247);

// Moss: clean results
const MOSS: (u8, u8, u8) = (115, 170, 110);

// Amber: dropped entries, warnings
const AMBER: (u8, u8, u8) = (224, 175, 104);

// Brick: errors
const BRICK: (u8, u8, u8) = (204, 102, 102);

const MUTED: (u8, u8, u8) = (110, 115, 130);

/// Called once from main.rs when `--no-color` is passed.
pub fn set_no_color() {
    // SAFETY: Called once at startup before any threads are spawned.
    unsafe { std::env::set_var("NO_COLOR", "1") };
}

pub fn accent(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(SLATE.0, SLATE.1, SLATE.2))
        .to_string()
}

pub fn ok(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(MOSS.0, MOSS.1, MOSS.2))
        .to_string()
}

pub fn dropped(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(AMBER.0, AMBER.1, AMBER.2))
        .to_string()
}

pub fn bold(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.bold()).to_string()
}

pub fn muted(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(MUTED.0, MUTED.1, MUTED.2))
        .to_string()
}

/// Error styling for stderr messages.
pub fn error(text: &str) -> String {
    text.if_supports_color(Stderr, |t| t.truecolor(BRICK.0, BRICK.1, BRICK.2))
        .to_string()
}

/// Warning styling for stderr messages.
pub fn warning(text: &str) -> String {
    text.if_supports_color(Stderr, |t| t.truecolor(AMBER.0, AMBER.1, AMBER.2))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_functions_contain_original_text() {
        // Regardless of color support, the original text must be present
        assert!(accent("p-1").contains("p-1"));
        assert!(ok("clean").contains("clean"));
        assert!(dropped("projects[0]").contains("projects[0]"));
        assert!(bold("Header").contains("Header"));
        assert!(muted("-").contains("-"));
        assert!(error("failed").contains("failed"));
        assert!(warning("careful").contains("careful"));
    }
}
