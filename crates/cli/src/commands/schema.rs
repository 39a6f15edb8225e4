// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs the JSON Schema of the stored board file.

use crate::error::Result;
use schemars::schema_for;

/// Run the schema command.
pub fn run() -> Result<()> {
    println!("{}", board_schema()?);
    Ok(())
}

pub(crate) fn board_schema() -> Result<String> {
    let schema = schema_for!(kb_core::Board);
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
