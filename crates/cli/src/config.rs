// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.kb/config.toml` and includes:
//! - `board`: Optional path to store the board file somewhere other than `.kb/`
//! - `confirm_deletes`: Whether deleting lanes and cards asks first

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use kb_core::{Board, FileStore, Store, BOARD_FILE_NAME};

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".kb";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Project configuration stored in `.kb/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Optional path to the board file (relative to project root or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<String>,
    /// Ask before deleting lanes and cards (default: true).
    #[serde(default = "default_confirm_deletes")]
    pub confirm_deletes: bool,
}

fn default_confirm_deletes() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            board: None,
            confirm_deletes: default_confirm_deletes(),
        }
    }
}

impl Config {
    /// Loads configuration from the given `.kb/` directory.
    ///
    /// A `.kb/` directory without a config file uses the defaults.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given `.kb/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Find the .kb directory by walking up from the current directory
pub fn find_work_dir() -> Result<PathBuf> {
    find_work_dir_from(&std::env::current_dir()?)
}

/// Find the .kb directory by walking up from `start`
pub fn find_work_dir_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Get the board file path from config
pub fn get_board_path(work_dir: &Path, config: &Config) -> PathBuf {
    match &config.board {
        Some(board) => {
            let board_path = Path::new(board);
            if board_path.is_absolute() {
                board_path.to_path_buf()
            } else {
                // Relative to work_dir's parent (the project root)
                work_dir.parent().unwrap_or(work_dir).join(board)
            }
        }
        None => work_dir.join(BOARD_FILE_NAME),
    }
}

/// Initialize a new .kb directory at the given path with an empty board
pub fn init_work_dir(path: &Path) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.join(CONFIG_FILE_NAME).exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;

    let config = Config::default();
    config.save(&work_dir)?;

    let board_path = get_board_path(&work_dir, &config);
    if !board_path.exists() {
        FileStore::new(board_path).save(&Board::new())?;
    }

    Ok(work_dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
