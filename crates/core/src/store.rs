// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Durable storage for the board.
//!
//! The board is always written as one unit under a fixed key. Loading never
//! trusts the stored shape: it goes through [`crate::migrate`].

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::board::Board;
use crate::error::{Error, Result};
use crate::migrate::load_or_empty;

/// File name of the board inside a project's `.kb/` directory.
pub const BOARD_FILE_NAME: &str = "board.json";

/// Somewhere a board can be saved to and loaded from.
pub trait Store {
    /// Loads the stored board. A missing or unrecognizable value is an empty board.
    fn load(&self) -> Result<Board>;

    /// Replaces the stored board.
    fn save(&mut self, board: &Board) -> Result<()>;
}

/// Serializes a board to its canonical stored text.
pub fn to_text(board: &Board) -> Result<String> {
    Ok(serde_json::to_string_pretty(board)?)
}

/// A board stored as a JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| BOARD_FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Store for FileStore {
    fn load(&self) -> Result<Board> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Board::new()),
            Err(e) => return Err(Error::Io(e)),
        };
        match String::from_utf8(bytes) {
            Ok(raw) => Ok(load_or_empty(&raw)),
            Err(e) => {
                tracing::debug!("stored board is not valid UTF-8, starting empty: {}", e);
                Ok(Board::new())
            }
        }
    }

    /// Writes to a sibling temp file, fsyncs, then renames over the target so a
    /// reader only ever sees the old or the new board. The temp file is removed
    /// if any step fails.
    fn save(&mut self, board: &Board) -> Result<()> {
        let text = to_text(board)?;
        let tmp = self.temp_path();

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let write = || -> std::io::Result<()> {
            let mut file = File::create(&tmp)?;
            file.write_all(text.as_bytes())?;
            file.write_all(b"\n")?;
            file.sync_all()?;
            drop(file);
            fs::rename(&tmp, &self.path)
        };

        if let Err(e) = write() {
            let _ = fs::remove_file(&tmp);
            return Err(Error::Io(e));
        }
        Ok(())
    }
}

/// An in-memory store. Holds the last saved text so tests can inspect exactly
/// what would have been written.
#[derive(Debug, Default)]
pub struct MemoryStore {
    raw: Option<String>,
    saves: usize,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with raw text, as if written by an earlier session.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        MemoryStore {
            raw: Some(raw.into()),
            ..Self::default()
        }
    }

    /// A store whose writes always fail, like a full disk.
    pub fn failing() -> Self {
        MemoryStore {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<Board> {
        Ok(self.raw.as_deref().map(load_or_empty).unwrap_or_default())
    }

    fn save(&mut self, board: &Board) -> Result<()> {
        if self.fail_writes {
            return Err(Error::Io(std::io::Error::other("storage quota exceeded")));
        }
        self.raw = Some(to_text(board)?);
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
