// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for kb-core operations.

use thiserror::Error;

/// All possible errors that can occur in kb-core operations.
///
/// Lookup misses (an id that is no longer on the board) are deliberately not
/// represented here: the engine reports them as `Ok(false)` / `Ok(None)`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("invalid status: '{0}'\n  hint: valid statuses are: backlog, in-progress, done")]
    InvalidStatus(String),

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: low, medium, high, urgent")]
    InvalidPriority(String),

    #[error("board not saved: {0}")]
    Storage(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns true for user-input validation failures.
    ///
    /// These are always local: the board is unchanged and nothing was persisted.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::FieldEmpty { .. } | Error::InvalidStatus(_) | Error::InvalidPriority(_)
        )
    }
}

/// A specialized Result type for kb-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
