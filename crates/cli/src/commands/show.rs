// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use kb_core::Board;

use crate::cli::OutputFormat;
use crate::colors;
use crate::display::format_board;
use crate::error::Result;

use super::open_board;

pub fn run(output: OutputFormat) -> Result<()> {
    let (ctl, _) = open_board()?;
    println!("{}", render(ctl.board(), output, colors::should_colorize())?);
    Ok(())
}

/// Internal implementation that accepts the board for testing.
pub(crate) fn render(board: &Board, output: OutputFormat, colorize: bool) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(format_board(board, colorize)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(board)?),
    }
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
