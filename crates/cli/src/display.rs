// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use kb_core::{Board, Card, Status, Workstream};

use crate::colors;

/// Maximum line width for wrapped descriptions (excluding indent).
const WRAP_WIDTH: usize = 72;

/// Wrap text at word boundaries if it's a single line.
///
/// - If content contains newlines: return as-is (preserve user formatting)
/// - If content is single line >width: wrap at word boundaries
/// - If content is single line <=width: return as-is
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.len() <= width {
        return content.to_string();
    }

    let mut result = String::new();
    let mut current_line = String::new();

    for word in content.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            if !result.is_empty() {
                result.push('\n');
            }
            result.push_str(&current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        if !result.is_empty() {
            result.push('\n');
        }
        result.push_str(&current_line);
    }

    result
}

/// Format a single card line: `- [id] Title [priority] #tag`
pub fn format_card_line(card: &Card, colorize: bool) -> String {
    let id = if colorize {
        colors::context(&card.id)
    } else {
        card.id.clone()
    };
    let mut line = format!("- [{}] {}", id, card.title);
    if let Some(priority) = card.priority {
        line.push(' ');
        line.push_str(&colors::priority_badge(priority, colorize));
    }
    for tag in &card.tags {
        line.push_str(" #");
        line.push_str(tag);
    }
    line
}

/// Format one workstream with its three status columns.
///
/// Output format:
/// ```text
/// Sprint 1 (ws-1a2b3c4d)
///   Backlog (1)
///     - [card-9f3e0a1b] Fix login [high] #bug
///         Users are logged out after refresh.
///   In Progress (0)
///   Done (0)
/// ```
pub fn format_workstream(ws: &Workstream, colorize: bool) -> Vec<String> {
    let mut lines = Vec::new();
    let title = if colorize {
        colors::header(&ws.name)
    } else {
        ws.name.clone()
    };
    lines.push(format!("{} ({})", title, ws.id));

    for status in Status::ALL {
        let cards: Vec<&Card> = ws.column(status).collect();
        lines.push(format!("  {} ({})", status.label(), cards.len()));
        for card in cards {
            lines.push(format!("    {}", format_card_line(card, colorize)));
            if !card.description.is_empty() {
                for line in wrap_text(&card.description, WRAP_WIDTH).lines() {
                    lines.push(format!("        {}", line));
                }
            }
        }
    }

    lines
}

/// Format the whole board for `kb show`.
pub fn format_board(board: &Board, colorize: bool) -> String {
    if board.is_empty() {
        return "No lanes yet. Create one with: kb lane new <name>".to_string();
    }
    board
        .workstreams
        .iter()
        .map(|ws| format_workstream(ws, colorize).join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
