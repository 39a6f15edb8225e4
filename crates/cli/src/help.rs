// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_board}
  {show}        Show the board
  {lane}        Create, rename, delete, and reorder lanes
  {card}        Create, edit, delete, move, and tag cards

{header_setup}
  {init}        Initialize a board
  {schema}      Output JSON Schema for the board file
  {completion}  Generate shell completions
",
        header_board = colors::header("Board:"),
        header_setup = colors::header("Setup:"),
        show = colors::literal("show"),
        lane = colors::literal("lane"),
        card = colors::literal("card"),
        init = colors::literal("init"),
        schema = colors::literal("schema"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  kb init                          Initialize a board here
  kb lane new \"Sprint 1\"           Add a lane
  kb card new <lane> \"Fix login\"   Add a card to the backlog
  kb card mv <card> in-progress    Move a card to another column
  kb show                          Show the board",
    )
}
