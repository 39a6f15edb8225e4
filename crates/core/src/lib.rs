// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! kb-core: Board model and engine for the kb task board
//!
//! This crate provides the board data structures, the migration layer that
//! rebuilds a board from untrusted stored JSON, board persistence, and the
//! mutation engine used by the `kb` CLI.

pub mod board;
pub mod engine;
pub mod error;
pub mod id;
pub mod intent;
pub mod migrate;
pub mod store;

pub use board::{Board, Card, Priority, Status, Workstream};
pub use engine::{parse_tags, BoardController, CardDraft};
pub use error::{Error, Result};
pub use id::{HashIds, IdGenerator, IdKind, SequentialIds};
pub use intent::{Applied, Confirm, Intent};
pub use migrate::{load_or_empty, migrate_board};
pub use store::{FileStore, MemoryStore, Store, BOARD_FILE_NAME};
