// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core board types for the kb task board.
//!
//! This module contains the fundamental data types: Board, Workstream, Card,
//! Status, and Priority. A status column is never stored on its own: it is the
//! subsequence of a workstream's single card list whose cards carry that status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Urgency of a card. Absence (`None`) means no priority was assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// All priorities, lowest first.
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    /// Exact match against the stored form. Used by migration, which must not
    /// guess at near-misses.
    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" | "med" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

/// Workflow column of a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Not yet started. Initial column for new cards.
    #[default]
    Backlog,
    /// Currently being worked on.
    InProgress,
    /// Completed.
    Done,
}

impl Status {
    /// Display order of the status columns.
    pub const ALL: [Status; 3] = [Status::Backlog, Status::InProgress, Status::Done];

    /// Returns the string representation used in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Backlog => "backlog",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }

    /// Human-readable column heading.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Backlog => "Backlog",
            Status::InProgress => "In Progress",
            Status::Done => "Done",
        }
    }

    /// Exact match against the stored form.
    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "backlog" => Ok(Status::Backlog),
            "in-progress" | "in_progress" | "inprogress" => Ok(Status::InProgress),
            "done" => Ok(Status::Done),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// A single task on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Card {
    /// Unique identifier, board-wide.
    pub id: String,
    /// Short description of the work. Never empty after trimming.
    pub title: String,
    /// Free-form details.
    pub description: String,
    /// Which column the card is shown in.
    pub status: Status,
    /// Serialized as `null` when absent.
    pub priority: Option<Priority>,
    /// Ordered, non-empty tags.
    pub tags: Vec<String>,
}

impl Card {
    /// Creates a backlog card with no description, priority, or tags.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Card {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            status: Status::default(),
            priority: None,
            tags: Vec::new(),
        }
    }

    /// Sets the status (builder pattern).
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority (builder pattern).
    pub fn with_priority(mut self, priority: Option<Priority>) -> Self {
        self.priority = priority;
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A named lane holding an ordered list of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Workstream {
    /// Unique identifier.
    pub id: String,
    /// Display name. Never empty.
    pub name: String,
    /// Flat card order; each status column is a subsequence of it.
    pub cards: Vec<Card>,
}

impl Workstream {
    /// Creates an empty workstream.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Workstream {
            id: id.into(),
            name: name.into(),
            cards: Vec::new(),
        }
    }

    /// Cards of one status column, in display order.
    pub fn column(&self, status: Status) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.status == status)
    }

    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }

    pub fn card_mut(&mut self, card_id: &str) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == card_id)
    }

    /// Index of a card in the flat list.
    pub fn position(&self, card_id: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.id == card_id)
    }
}

/// The aggregate root: every workstream, in layout order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Board {
    pub workstreams: Vec<Workstream>,
}

impl Board {
    /// Creates a board with no workstreams.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.workstreams.is_empty()
    }

    pub fn workstream(&self, ws_id: &str) -> Option<&Workstream> {
        self.workstreams.iter().find(|w| w.id == ws_id)
    }

    pub fn workstream_mut(&mut self, ws_id: &str) -> Option<&mut Workstream> {
        self.workstreams.iter_mut().find(|w| w.id == ws_id)
    }

    /// Index of the workstream that owns `card_id`.
    pub fn owner_index(&self, card_id: &str) -> Option<usize> {
        self.workstreams
            .iter()
            .position(|w| w.cards.iter().any(|c| c.id == card_id))
    }

    /// Finds a card anywhere on the board, along with its workstream.
    pub fn find_card(&self, card_id: &str) -> Option<(&Workstream, &Card)> {
        self.workstreams
            .iter()
            .find_map(|w| w.card(card_id).map(|c| (w, c)))
    }

    /// Total number of cards across all workstreams.
    pub fn card_count(&self) -> usize {
        self.workstreams.iter().map(|w| w.cards.len()).sum()
    }

    /// True if any workstream or card already uses `id`.
    pub fn contains_id(&self, id: &str) -> bool {
        self.workstreams
            .iter()
            .any(|w| w.id == id || w.cards.iter().any(|c| c.id == id))
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
