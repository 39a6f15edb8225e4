// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution of user-typed lane and card ids.
//!
//! An argument names an entity either by its exact id or by a prefix that
//! matches exactly one id. Prefixes shorter than [`MIN_PREFIX_LEN`] only
//! match exactly.

use kb_core::{Board, Workstream};

use crate::error::{Error, Result};

pub const MIN_PREFIX_LEN: usize = 3;

fn resolve<'a>(
    kind: &'static str,
    partial: &str,
    ids: impl Iterator<Item = &'a str> + Clone,
) -> Result<Option<String>> {
    if let Some(id) = ids.clone().find(|id| *id == partial) {
        return Ok(Some(id.to_string()));
    }
    if partial.len() < MIN_PREFIX_LEN {
        return Ok(None);
    }

    let matches: Vec<String> = ids
        .filter(|id| id.starts_with(partial))
        .map(str::to_string)
        .collect();
    match matches.len() {
        0 => Ok(None),
        1 => Ok(matches.into_iter().next()),
        _ => Err(Error::AmbiguousId {
            kind,
            prefix: partial.to_string(),
            matches,
        }),
    }
}

/// Resolve a lane id or prefix.
pub fn workstream_id(board: &Board, partial: &str) -> Result<Option<String>> {
    resolve(
        "lane",
        partial,
        board.workstreams.iter().map(|w| w.id.as_str()),
    )
}

/// Resolve a card id or prefix within one lane.
pub fn card_id_in(ws: &Workstream, partial: &str) -> Result<Option<String>> {
    resolve("card", partial, ws.cards.iter().map(|c| c.id.as_str()))
}

/// Resolve a card id or prefix anywhere on the board.
pub fn card_id(board: &Board, partial: &str) -> Result<Option<String>> {
    resolve(
        "card",
        partial,
        board
            .workstreams
            .iter()
            .flat_map(|w| w.cards.iter().map(|c| c.id.as_str())),
    )
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
