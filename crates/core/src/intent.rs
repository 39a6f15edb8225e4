// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed user intents.
//!
//! A presentation layer turns gestures (drag end, form submit, button press)
//! into an [`Intent`] and hands it to [`BoardController::dispatch`]. Handling is
//! synchronous and runs to completion before the next intent.

use crate::board::{Card, Status, Workstream};
use crate::engine::{BoardController, CardDraft};
use crate::error::Result;
use crate::store::Store;

/// One user action against the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    CreateWorkstream {
        name: String,
    },
    RenameWorkstream {
        ws_id: String,
        name: String,
    },
    DeleteWorkstream {
        ws_id: String,
    },
    /// A row drag. Either index may be missing if the gesture was aborted.
    ReorderWorkstreams {
        old_index: Option<usize>,
        new_index: Option<usize>,
    },
    CreateCard {
        ws_id: String,
        draft: CardDraft,
    },
    UpdateCard {
        ws_id: String,
        card_id: String,
        draft: CardDraft,
    },
    DeleteCard {
        ws_id: String,
        card_id: String,
    },
    /// A card dropped into a status column of its own workstream.
    MoveCard {
        card_id: String,
        from_status: Status,
        to_status: Status,
        new_index: usize,
    },
    /// A card dropped into another workstream.
    TransferCard {
        card_id: String,
        to_ws_id: String,
        to_status: Status,
        new_index: usize,
    },
    AddTag {
        ws_id: String,
        card_id: String,
        tag: String,
    },
    RemoveTag {
        ws_id: String,
        card_id: String,
        tag: String,
    },
}

/// A destructive action waiting for the user's yes or no.
#[derive(Debug, Clone, Copy)]
pub enum Confirm<'a> {
    DeleteWorkstream(&'a Workstream),
    DeleteCard(&'a Card),
}

impl Confirm<'_> {
    /// Question to put to the user.
    pub fn message(&self) -> String {
        match self {
            Confirm::DeleteWorkstream(ws) => format!(
                "Delete \"{}\" and its {} card(s)?",
                ws.name,
                ws.cards.len()
            ),
            Confirm::DeleteCard(card) => format!("Delete card \"{}\"?", card.title),
        }
    }
}

/// What dispatching an intent did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// Something new was added; carries its id.
    Created(String),
    Changed,
    /// Nothing to do: stale id, declined confirmation, or a no-op move.
    Unchanged,
}

impl From<bool> for Applied {
    fn from(changed: bool) -> Self {
        if changed {
            Applied::Changed
        } else {
            Applied::Unchanged
        }
    }
}

impl<S: Store> BoardController<S> {
    /// Apply one intent. `confirm` is only consulted for destructive intents.
    pub fn dispatch<F>(&mut self, intent: Intent, confirm: F) -> Result<Applied>
    where
        F: FnOnce(Confirm<'_>) -> bool,
    {
        let applied = match intent {
            Intent::CreateWorkstream { name } => Applied::Created(self.create_workstream(&name)?),
            Intent::RenameWorkstream { ws_id, name } => {
                self.rename_workstream(&ws_id, &name)?.into()
            }
            Intent::DeleteWorkstream { ws_id } => self
                .delete_workstream(&ws_id, |ws| confirm(Confirm::DeleteWorkstream(ws)))?
                .into(),
            Intent::ReorderWorkstreams {
                old_index: Some(old_index),
                new_index: Some(new_index),
            } => self.reorder_workstream_rows(old_index, new_index)?.into(),
            Intent::ReorderWorkstreams { .. } => Applied::Unchanged,
            Intent::CreateCard { ws_id, draft } => match self.create_card(&ws_id, draft)? {
                Some(id) => Applied::Created(id),
                None => Applied::Unchanged,
            },
            Intent::UpdateCard {
                ws_id,
                card_id,
                draft,
            } => self.update_card(&ws_id, &card_id, draft)?.into(),
            Intent::DeleteCard { ws_id, card_id } => self
                .delete_card(&ws_id, &card_id, |card| confirm(Confirm::DeleteCard(card)))?
                .into(),
            Intent::MoveCard {
                card_id,
                from_status,
                to_status,
                new_index,
            } => self
                .move_card(&card_id, from_status, to_status, new_index)?
                .into(),
            Intent::TransferCard {
                card_id,
                to_ws_id,
                to_status,
                new_index,
            } => self
                .transfer_card(&card_id, &to_ws_id, to_status, new_index)?
                .into(),
            Intent::AddTag {
                ws_id,
                card_id,
                tag,
            } => self.add_tag(&ws_id, &card_id, &tag)?.into(),
            Intent::RemoveTag {
                ws_id,
                card_id,
                tag,
            } => self.remove_tag(&ws_id, &card_id, &tag)?.into(),
        };
        Ok(applied)
    }
}

#[cfg(test)]
#[path = "intent_tests.rs"]
mod tests;
