// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and board output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use kb_core::Priority;

use crate::env;

/// ANSI 256-color codes
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;

    pub const PRIORITY_LOW: u8 = 108;
    pub const PRIORITY_MEDIUM: u8 = 179;
    pub const PRIORITY_HIGH: u8 = 208;
    pub const PRIORITY_URGENT: u8 = 167;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, RESET)
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (ids, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

pub fn priority_code(priority: Priority) -> u8 {
    match priority {
        Priority::Low => codes::PRIORITY_LOW,
        Priority::Medium => codes::PRIORITY_MEDIUM,
        Priority::High => codes::PRIORITY_HIGH,
        Priority::Urgent => codes::PRIORITY_URGENT,
    }
}

/// Priority badge, e.g. `[high]`, colored when `colorize` is set.
pub fn priority_badge(priority: Priority, colorize: bool) -> String {
    let badge = format!("[{}]", priority.as_str());
    if colorize {
        paint(priority_code(priority), &badge)
    } else {
        badge
    }
}

/// Colorize an examples help block.
///
/// Expects format like:
/// ```text
/// Examples:
///   kb lane new "Sprint 1"     Description here
/// ```
///
/// Header lines (ending with `:`) get the header color, the command part of an
/// example line gets the literal color, and the description is left as-is.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len() + 256);

    for line in text.lines() {
        if !result.is_empty() {
            result.push('\n');
        }

        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            result.push_str(indent);
            result.push_str(&header(trimmed));
            continue;
        }

        if let Some(cmd_end) = trimmed.find("  ") {
            result.push_str(indent);
            result.push_str(&literal(&trimmed[..cmd_end]));
            result.push_str(&trimmed[cmd_end..]);
            continue;
        }

        result.push_str(line);
    }

    result
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
