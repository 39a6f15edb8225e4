// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board mutation engine.
//!
//! [`BoardController`] owns the in-memory [`Board`] and is the only thing that
//! mutates it. Every successful mutation is persisted in the same call. If the
//! save fails the mutation stays applied in memory and [`Error::Storage`] is
//! returned, so the caller can warn while the session keeps working.
//!
//! Validation failures leave the board untouched and skip persistence. Ids that
//! are no longer on the board are silent no-ops (`Ok(false)` / `Ok(None)`).

use crate::board::{Board, Card, Priority, Status, Workstream};
use crate::error::{Error, Result};
use crate::id::{unique_id, HashIds, IdGenerator, IdKind};
use crate::store::Store;

/// User-entered card fields, as submitted by a create or edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDraft {
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Option<Priority>,
    pub tags: Vec<String>,
}

impl CardDraft {
    pub fn new(title: impl Into<String>) -> Self {
        CardDraft {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: Option<Priority>) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

impl From<&Card> for CardDraft {
    fn from(card: &Card) -> Self {
        CardDraft {
            title: card.title.clone(),
            description: card.description.clone(),
            status: card.status,
            priority: card.priority,
            tags: card.tags.clone(),
        }
    }
}

/// Split comma-separated tag input into trimmed, non-empty, unique tags.
pub fn parse_tags(input: &str) -> Vec<String> {
    normalize_tags(input.split(',').map(str::to_string))
}

/// Trim, drop empties, and deduplicate keeping the first occurrence.
pub fn normalize_tags(tags: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

fn require_non_empty(value: &str, field: &'static str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::FieldEmpty { field });
    }
    Ok(trimmed.to_string())
}

/// Flat-list index at which a card lands when dropped at `index` in the
/// `status` column of `cards`.
///
/// The position is relative to the column's own subsequence, so cards of other
/// statuses never change relative order.
pub fn column_insert_index(cards: &[Card], status: Status, index: usize) -> usize {
    let mut last = None;
    for (seen, (i, _)) in cards
        .iter()
        .enumerate()
        .filter(|(_, c)| c.status == status)
        .enumerate()
    {
        if seen == index {
            return i;
        }
        last = Some(i);
    }
    last.map_or(cards.len(), |i| i + 1)
}

/// Owner of the live board.
pub struct BoardController<S: Store> {
    board: Board,
    store: S,
    ids: Box<dyn IdGenerator>,
}

impl<S: Store> BoardController<S> {
    /// Loads the board from `store`.
    pub fn open(store: S) -> Result<Self> {
        let board = store.load()?;
        Ok(Self::with_board(board, store))
    }

    /// Wraps an already-loaded board.
    pub fn with_board(board: Board, store: S) -> Self {
        BoardController {
            board,
            store,
            ids: Box::new(HashIds::default()),
        }
    }

    /// Replaces the id generator (builder pattern).
    pub fn with_ids(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Read-only view for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save(&self.board).map_err(|e| {
            tracing::warn!("failed to persist board, keeping in-memory state: {}", e);
            Error::Storage(e.to_string())
        })
    }

    fn fresh_id(&mut self, kind: IdKind, seed: &str) -> String {
        let base = self.ids.next_id(kind, seed);
        let board = &self.board;
        unique_id(base, |id| board.contains_id(id))
    }

    // ── Workstreams ──

    /// Appends a new, empty workstream. Returns its id.
    pub fn create_workstream(&mut self, name: &str) -> Result<String> {
        let name = require_non_empty(name, "Workstream name")?;
        let id = self.fresh_id(IdKind::Workstream, &name);
        tracing::debug!("creating workstream {} ({})", id, name);
        self.board.workstreams.push(Workstream::new(id.clone(), name));
        self.persist()?;
        Ok(id)
    }

    pub fn rename_workstream(&mut self, ws_id: &str, name: &str) -> Result<bool> {
        let name = require_non_empty(name, "Workstream name")?;
        let Some(ws) = self.board.workstream_mut(ws_id) else {
            return Ok(false);
        };
        tracing::debug!("renaming workstream {} to {}", ws_id, name);
        ws.name = name;
        self.persist()?;
        Ok(true)
    }

    /// Removes a workstream and its cards.
    ///
    /// A workstream with cards is only removed if `confirm` agrees. A declined
    /// confirmation changes nothing and saves nothing.
    pub fn delete_workstream<F>(&mut self, ws_id: &str, confirm: F) -> Result<bool>
    where
        F: FnOnce(&Workstream) -> bool,
    {
        let Some(index) = self.board.workstreams.iter().position(|w| w.id == ws_id) else {
            return Ok(false);
        };
        let ws = &self.board.workstreams[index];
        if !ws.cards.is_empty() && !confirm(ws) {
            return Ok(false);
        }
        let removed = self.board.workstreams.remove(index);
        tracing::debug!(
            "deleted workstream {} with {} card(s)",
            removed.id,
            removed.cards.len()
        );
        self.persist()?;
        Ok(true)
    }

    /// Moves the workstream at `old_index` to `new_index`, shifting the rest.
    pub fn reorder_workstreams(&mut self, old_index: usize, new_index: usize) -> Result<bool> {
        let len = self.board.workstreams.len();
        if old_index == new_index || old_index >= len || new_index >= len {
            return Ok(false);
        }
        let moved = self.board.workstreams.remove(old_index);
        self.board.workstreams.insert(new_index, moved);
        tracing::debug!("moved workstream from {} to {}", old_index, new_index);
        self.persist()?;
        Ok(true)
    }

    /// Row drag-handle entry point; same relocation as [`Self::reorder_workstreams`].
    pub fn reorder_workstream_rows(&mut self, old_index: usize, new_index: usize) -> Result<bool> {
        self.reorder_workstreams(old_index, new_index)
    }

    // ── Cards ──

    /// Appends a card to a workstream. Returns the new card id, or `None` if the
    /// workstream is gone.
    pub fn create_card(&mut self, ws_id: &str, draft: CardDraft) -> Result<Option<String>> {
        let title = require_non_empty(&draft.title, "Title")?;
        if self.board.workstream(ws_id).is_none() {
            return Ok(None);
        }
        let id = self.fresh_id(IdKind::Card, &title);
        let card = Card {
            id: id.clone(),
            title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            tags: normalize_tags(draft.tags),
        };
        if let Some(ws) = self.board.workstream_mut(ws_id) {
            ws.cards.push(card);
        }
        tracing::debug!("created card {} in {}", id, ws_id);
        self.persist()?;
        Ok(Some(id))
    }

    /// Overwrites every editable field of a card. Identity and position stay.
    pub fn update_card(&mut self, ws_id: &str, card_id: &str, draft: CardDraft) -> Result<bool> {
        let title = require_non_empty(&draft.title, "Title")?;
        let Some(card) = self
            .board
            .workstream_mut(ws_id)
            .and_then(|ws| ws.card_mut(card_id))
        else {
            return Ok(false);
        };
        card.title = title;
        card.description = draft.description;
        card.status = draft.status;
        card.priority = draft.priority;
        card.tags = normalize_tags(draft.tags);
        tracing::debug!("updated card {}", card_id);
        self.persist()?;
        Ok(true)
    }

    /// Removes a card after `confirm` agrees.
    pub fn delete_card<F>(&mut self, ws_id: &str, card_id: &str, confirm: F) -> Result<bool>
    where
        F: FnOnce(&Card) -> bool,
    {
        let Some(ws) = self.board.workstream_mut(ws_id) else {
            return Ok(false);
        };
        let Some(pos) = ws.position(card_id) else {
            return Ok(false);
        };
        if !confirm(&ws.cards[pos]) {
            return Ok(false);
        }
        ws.cards.remove(pos);
        tracing::debug!("deleted card {} from {}", card_id, ws_id);
        self.persist()?;
        Ok(true)
    }

    /// Drops a card into position `new_index` of the `to_status` column of its
    /// own workstream.
    ///
    /// An index at or past the end of the column places the card right after
    /// the column's last card, or at the end of the workstream if the column
    /// is empty.
    pub fn move_card(
        &mut self,
        card_id: &str,
        from_status: Status,
        to_status: Status,
        new_index: usize,
    ) -> Result<bool> {
        let Some(owner) = self.board.owner_index(card_id) else {
            return Ok(false);
        };
        let ws = &mut self.board.workstreams[owner];
        let Some(pos) = ws.position(card_id) else {
            return Ok(false);
        };

        let mut card = ws.cards.remove(pos);
        if from_status != to_status {
            card.status = to_status;
        }
        let at = column_insert_index(&ws.cards, to_status, new_index);
        ws.cards.insert(at, card);

        tracing::debug!(
            "moved card {} to {} column at {} (flat index {})",
            card_id,
            to_status,
            new_index,
            at
        );
        self.persist()?;
        Ok(true)
    }

    /// Drops a card into another workstream's `to_status` column.
    ///
    /// Placement follows the same column-relative rule as [`Self::move_card`].
    /// Dropping into the owning workstream is a plain move.
    pub fn transfer_card(
        &mut self,
        card_id: &str,
        to_ws_id: &str,
        to_status: Status,
        new_index: usize,
    ) -> Result<bool> {
        let Some(owner) = self.board.owner_index(card_id) else {
            return Ok(false);
        };
        if self.board.workstreams[owner].id == to_ws_id {
            let from_status = self.board.workstreams[owner]
                .card(card_id)
                .map(|c| c.status)
                .unwrap_or(to_status);
            return self.move_card(card_id, from_status, to_status, new_index);
        }
        let Some(dest) = self.board.workstreams.iter().position(|w| w.id == to_ws_id) else {
            return Ok(false);
        };

        let source = &mut self.board.workstreams[owner];
        let Some(pos) = source.position(card_id) else {
            return Ok(false);
        };
        let mut card = source.cards.remove(pos);
        card.status = to_status;

        let dest = &mut self.board.workstreams[dest];
        let at = column_insert_index(&dest.cards, to_status, new_index);
        dest.cards.insert(at, card);

        tracing::debug!("transferred card {} to {} at {}", card_id, to_ws_id, at);
        self.persist()?;
        Ok(true)
    }

    /// Adds a tag unless the card already has it.
    pub fn add_tag(&mut self, ws_id: &str, card_id: &str, tag: &str) -> Result<bool> {
        let tag = tag.trim();
        let tag = require_non_empty(tag.strip_suffix(',').unwrap_or(tag), "Tag")?;
        let Some(card) = self
            .board
            .workstream_mut(ws_id)
            .and_then(|ws| ws.card_mut(card_id))
        else {
            return Ok(false);
        };
        if card.has_tag(&tag) {
            return Ok(false);
        }
        tracing::debug!("tagged card {} with {}", card_id, tag);
        card.tags.push(tag);
        self.persist()?;
        Ok(true)
    }

    pub fn remove_tag(&mut self, ws_id: &str, card_id: &str, tag: &str) -> Result<bool> {
        let tag = tag.trim();
        let Some(card) = self
            .board
            .workstream_mut(ws_id)
            .and_then(|ws| ws.card_mut(card_id))
        else {
            return Ok(false);
        };
        if !card.has_tag(tag) {
            return Ok(false);
        }
        card.tags.retain(|t| t != tag);
        tracing::debug!("removed tag {} from card {}", tag, card_id);
        self.persist()?;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
