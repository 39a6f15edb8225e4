// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the kbrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'kb init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("ambiguous {kind} ID '{prefix}' matches: {}", matches.join(", "))]
    AmbiguousId {
        kind: &'static str,
        prefix: String,
        matches: Vec<String>,
    },

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("invalid status: '{0}'\n  hint: valid statuses are: backlog, in-progress, done")]
    InvalidStatus(String),

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: low, medium, high, urgent")]
    InvalidPriority(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("board not saved: {0}")]
    Storage(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for kbrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<kb_core::Error> for Error {
    fn from(e: kb_core::Error) -> Self {
        match e {
            kb_core::Error::FieldEmpty { field } => Error::FieldEmpty { field },
            kb_core::Error::InvalidStatus(s) => Error::InvalidStatus(s),
            kb_core::Error::InvalidPriority(s) => Error::InvalidPriority(s),
            kb_core::Error::Storage(s) => Error::Storage(s),
            kb_core::Error::Io(e) => Error::Io(e),
            kb_core::Error::Json(e) => Error::Json(e),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
