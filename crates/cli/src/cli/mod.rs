// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{CardFieldArgs, YesArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "kb")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "A single-user kanban board for the terminal")]
#[command(
    long_about = "A single-user kanban board for the terminal.\n\n\
    Organize cards into lanes, each split into Backlog, In Progress and Done columns."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Run as if kb was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Board
    // ─────────────────────────────────────────────────────────────────────────
    /// Show the board
    #[command(after_help = colors::examples("\
Examples:
  kb show                  Show every lane with its columns
  kb show -o json          Print the stored board as JSON"))]
    Show {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Manage lanes (workstreams)
    #[command(subcommand)]
    Lane(LaneCommand),

    /// Manage cards
    #[command(subcommand)]
    Card(CardCommand),

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Initialize a board in the current directory
    #[command(after_help = colors::examples("\
Examples:
  kb init                  Initialize in current directory
  kb init ~/boards/home    Initialize at a specific path"))]
    Init {
        /// Directory to initialize (default: current directory)
        path: Option<String>,
    },

    /// Print the JSON Schema of the board file
    Schema,

    /// Generate shell completions
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  kb completion bash > ~/.local/share/bash-completion/completions/kb
  kb completion zsh > ~/.zfunc/_kb
  kb completion fish > ~/.config/fish/completions/kb.fish")
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Lane (workstream) commands.
#[derive(Subcommand)]
pub enum LaneCommand {
    /// Add a lane at the bottom of the board
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  kb lane new \"Sprint 1\"        Create a lane")
    )]
    New {
        /// Lane name
        #[arg(value_parser = non_empty_string)]
        name: String,
    },

    /// Rename a lane
    #[command(arg_required_else_help = true)]
    Rename {
        /// Lane ID (or unique prefix)
        ws: String,

        /// New name
        #[arg(value_parser = non_empty_string)]
        name: String,
    },

    /// Delete a lane and its cards
    #[command(arg_required_else_help = true)]
    Rm {
        /// Lane ID (or unique prefix)
        ws: String,

        #[command(flatten)]
        yes: YesArgs,
    },

    /// Move a lane to another row
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  kb lane mv 0 2               Move the first lane to the third row")
    )]
    Mv {
        /// Current row (0-based)
        from: usize,

        /// New row (0-based)
        to: usize,
    },
}

/// Card commands.
#[derive(Subcommand)]
pub enum CardCommand {
    /// Add a card to a lane
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  kb card new ws-1a2b \"Fix login\"                 Create in Backlog
  kb card new ws-1a2b \"Ship it\" -s in-progress    Create in In Progress
  kb card new ws-1a2b \"Crash\" -p urgent -t bug,ui With priority and tags")
    )]
    New {
        /// Lane ID (or unique prefix)
        ws: String,

        /// Card title
        #[arg(value_parser = non_empty_string)]
        title: String,

        #[command(flatten)]
        fields: CardFieldArgs,
    },

    /// Edit a card
    #[command(arg_required_else_help = true)]
    Edit {
        /// Lane ID (or unique prefix)
        ws: String,

        /// Card ID (or unique prefix)
        card: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        fields: CardFieldArgs,

        /// Clear the priority
        #[arg(long, conflicts_with = "priority")]
        no_priority: bool,
    },

    /// Delete a card
    #[command(arg_required_else_help = true)]
    Rm {
        /// Lane ID (or unique prefix)
        ws: String,

        /// Card ID (or unique prefix)
        card: String,

        #[command(flatten)]
        yes: YesArgs,
    },

    /// Move a card to a column, optionally in another lane
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  kb card mv card-9f3e done                Move to the end of Done
  kb card mv card-9f3e in-progress -i 0    Move to the top of In Progress
  kb card mv card-9f3e backlog --lane ws-2 Move into another lane")
    )]
    Mv {
        /// Card ID (or unique prefix)
        card: String,

        /// Target column (backlog, in-progress, done)
        status: String,

        /// Position within the column (0-based, default: end)
        #[arg(long, short)]
        index: Option<usize>,

        /// Target lane (default: the card's own lane)
        #[arg(long)]
        lane: Option<String>,
    },

    /// Add a tag to a card
    #[command(arg_required_else_help = true)]
    Tag {
        /// Lane ID (or unique prefix)
        ws: String,

        /// Card ID (or unique prefix)
        card: String,

        /// Tag to add
        tag: String,
    },

    /// Remove a tag from a card
    #[command(arg_required_else_help = true)]
    Untag {
        /// Lane ID (or unique prefix)
        ws: String,

        /// Card ID (or unique prefix)
        card: String,

        /// Tag to remove
        tag: String,
    },
}
