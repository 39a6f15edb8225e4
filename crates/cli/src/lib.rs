// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! kbrs - A single-user kanban board for the terminal.
//!
//! This crate provides the presentation layer for the `kb` CLI tool on top of
//! the [`kb_core`] board engine: argument parsing, project discovery, delete
//! confirmation, and text/JSON rendering.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - clap definitions for every subcommand
//! - [`Config`] - Project configuration (board location, delete confirmation)
//! - [`Error`] - Error types for all operations
//!
//! # Initialization
//!
//! Use [`init_work_dir`] to create a new `.kb/` directory, then open the board:
//!
//! ```rust,ignore
//! use kb_core::{BoardController, FileStore};
//! use kbrs::{find_work_dir, get_board_path, init_work_dir, Config};
//!
//! // Initialize a new project
//! let work_dir = init_work_dir(Path::new("."))?;
//!
//! // Later, find and open an existing project
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let board_path = get_board_path(&work_dir, &config);
//! let ctl = BoardController::open(FileStore::new(board_path))?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod help;
mod prompt;
mod resolve;

pub mod config;
pub mod error;

pub use cli::{CardCommand, CardFieldArgs, Cli, Command, LaneCommand, OutputFormat, YesArgs};
pub use config::{find_work_dir, get_board_path, init_work_dir, Config};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { path } => commands::init::run(path),
        Command::Show { output } => commands::show::run(output),
        Command::Lane(cmd) => match cmd {
            LaneCommand::New { name } => commands::lane::new(&name),
            LaneCommand::Rename { ws, name } => commands::lane::rename(&ws, &name),
            LaneCommand::Rm { ws, yes } => commands::lane::remove(&ws, yes.yes),
            LaneCommand::Mv { from, to } => commands::lane::reorder(from, to),
        },
        Command::Card(cmd) => match cmd {
            CardCommand::New { ws, title, fields } => commands::card::new(&ws, &title, fields),
            CardCommand::Edit {
                ws,
                card,
                title,
                fields,
                no_priority,
            } => commands::card::edit(&ws, &card, title, fields, no_priority),
            CardCommand::Rm { ws, card, yes } => commands::card::remove(&ws, &card, yes.yes),
            CardCommand::Mv {
                card,
                status,
                index,
                lane,
            } => commands::card::move_to(&card, &status, index, lane.as_deref()),
            CardCommand::Tag { ws, card, tag } => commands::card::tag(&ws, &card, &tag),
            CardCommand::Untag { ws, card, tag } => commands::card::untag(&ws, &card, &tag),
        },
        Command::Schema => commands::schema::run(),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "kb", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
