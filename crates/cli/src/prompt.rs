// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Yes/no confirmation for destructive commands.

use std::io::{self, BufRead, IsTerminal, Write};

/// How a delete confirmation gets answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmMode {
    /// `-y` was passed or the project disabled `confirm_deletes`.
    Assume,
    /// Ask on the terminal; decline when stdin is not a TTY.
    Ask,
}

impl ConfirmMode {
    pub fn new(yes: bool, confirm_deletes: bool) -> Self {
        if yes || !confirm_deletes {
            ConfirmMode::Assume
        } else {
            ConfirmMode::Ask
        }
    }

    /// Answer `question`, prompting on stderr if needed.
    pub fn confirm(self, question: &str) -> bool {
        match self {
            ConfirmMode::Assume => true,
            ConfirmMode::Ask => {
                if !io::stdin().is_terminal() {
                    tracing::debug!("stdin is not a terminal, declining: {}", question);
                    return false;
                }
                ask(question, &mut io::stdin().lock(), &mut io::stderr())
            }
        }
    }
}

/// Write `question [y/N] ` and read one answer line.
///
/// Only `y` or `yes` (any case) accepts. Read errors decline.
pub fn ask(question: &str, input: &mut impl BufRead, output: &mut impl Write) -> bool {
    if write!(output, "{} [y/N] ", question)
        .and_then(|_| output.flush())
        .is_err()
    {
        return false;
    }
    let mut answer = String::new();
    if input.read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
