// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! between commands that create and edit cards.

use clap::Args;

/// Optional card fields shared by `card new` and `card edit`.
#[derive(Args, Clone, Debug, Default)]
pub struct CardFieldArgs {
    /// Card description
    #[arg(long, short)]
    pub description: Option<String>,

    /// Status column (backlog, in-progress, done)
    #[arg(long, short)]
    pub status: Option<String>,

    /// Priority (low, medium, high, urgent)
    #[arg(long, short)]
    pub priority: Option<String>,

    /// Tags (comma-separated)
    #[arg(long, short)]
    pub tags: Option<String>,
}

/// Skip the delete confirmation prompt.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct YesArgs {
    /// Delete without asking
    #[arg(long, short)]
    pub yes: bool,
}
