// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Id generation for workstreams and cards.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// What an id is being generated for. Determines the id prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Workstream,
    Card,
}

impl IdKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            IdKind::Workstream => "ws",
            IdKind::Card => "card",
        }
    }
}

/// Source of opaque ids. Uniqueness against the board is checked by the
/// caller, not by the generator.
pub trait IdGenerator {
    /// Produce a candidate id. `seed` is the new item's name or title.
    fn next_id(&mut self, kind: IdKind, seed: &str) -> String;
}

/// Generate an id from kind, seed, timestamp, and a per-session counter.
/// Format: {prefix}-{hash} where hash is first 8 hex chars of SHA256.
pub fn generate_id(kind: IdKind, seed: &str, created_at: &DateTime<Utc>, counter: u64) -> String {
    let input = format!("{}{}{}", seed, created_at.to_rfc3339(), counter);
    let hash = Sha256::digest(input.as_bytes());
    let short_hash = hex::encode(&hash[..4]);
    format!("{}-{}", kind.prefix(), short_hash)
}

/// Returns `base` if free, else the first free `{base}-N` for N >= 2.
pub fn unique_id<F>(base: String, exists: F) -> String
where
    F: Fn(&str) -> bool,
{
    if !exists(&base) {
        return base;
    }

    let mut suffix = 2;
    loop {
        let id = format!("{}-{}", base, suffix);
        if !exists(&id) {
            return id;
        }
        suffix += 1;
    }
}

/// Default generator: hashed ids seeded by wall-clock time.
#[derive(Debug, Default)]
pub struct HashIds {
    counter: u64,
}

impl IdGenerator for HashIds {
    fn next_id(&mut self, kind: IdKind, seed: &str) -> String {
        self.counter += 1;
        generate_id(kind, seed, &Utc::now(), self.counter)
    }
}

/// Predictable ids (`ws-1`, `card-2`, ...) for tests and scripted use.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, kind: IdKind, _seed: &str) -> String {
        self.next += 1;
        format!("{}-{}", kind.prefix(), self.next)
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
