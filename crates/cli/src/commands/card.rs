// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use kb_core::{parse_tags, Applied, BoardController, CardDraft, Intent, Priority, Status, Store};

use crate::cli::CardFieldArgs;
use crate::error::Result;
use crate::prompt::ConfirmMode;
use crate::resolve;

use super::{lane_and_card, lane_id, open_board, report_missing};

fn parse_status(value: Option<&str>) -> Result<Option<Status>> {
    Ok(value.map(str::parse::<Status>).transpose()?)
}

fn parse_priority(value: Option<&str>) -> Result<Option<Priority>> {
    Ok(value.map(str::parse::<Priority>).transpose()?)
}

pub fn new(ws: &str, title: &str, fields: CardFieldArgs) -> Result<()> {
    let (mut ctl, _) = open_board()?;
    new_impl(&mut ctl, ws, title, fields)
}

/// Internal implementation that accepts the controller for testing.
pub(crate) fn new_impl<S: Store>(
    ctl: &mut BoardController<S>,
    ws: &str,
    title: &str,
    fields: CardFieldArgs,
) -> Result<()> {
    let status = parse_status(fields.status.as_deref())?.unwrap_or_default();
    let priority = parse_priority(fields.priority.as_deref())?;
    let draft = CardDraft::new(title)
        .with_description(fields.description.unwrap_or_default())
        .with_status(status)
        .with_priority(priority)
        .with_tags(fields.tags.as_deref().map(parse_tags).unwrap_or_default());

    let Some(ws_id) = lane_id(ctl, ws)? else {
        return report_missing("lane", ws);
    };
    let intent = Intent::CreateCard {
        ws_id: ws_id.clone(),
        draft,
    };
    if let Applied::Created(id) = ctl.dispatch(intent, |_| false)? {
        println!("Created {} in {} ({})", id, ws_id, status.label());
    }
    Ok(())
}

pub fn edit(
    ws: &str,
    card: &str,
    title: Option<String>,
    fields: CardFieldArgs,
    no_priority: bool,
) -> Result<()> {
    let (mut ctl, _) = open_board()?;
    edit_impl(&mut ctl, ws, card, title, fields, no_priority)
}

/// Update only the fields that were given; the rest keep their values.
pub(crate) fn edit_impl<S: Store>(
    ctl: &mut BoardController<S>,
    ws: &str,
    card: &str,
    title: Option<String>,
    fields: CardFieldArgs,
    no_priority: bool,
) -> Result<()> {
    let status = parse_status(fields.status.as_deref())?;
    let priority = parse_priority(fields.priority.as_deref())?;

    let Some((ws_id, card_id)) = lane_and_card(ctl, ws, card)? else {
        return Ok(());
    };
    let Some(current) = ctl
        .board()
        .workstream(&ws_id)
        .and_then(|w| w.card(&card_id))
    else {
        return report_missing("card", card);
    };

    let mut draft = CardDraft::from(current);
    if let Some(title) = title {
        draft.title = title;
    }
    if let Some(description) = fields.description {
        draft.description = description;
    }
    if let Some(status) = status {
        draft.status = status;
    }
    if no_priority {
        draft.priority = None;
    } else if priority.is_some() {
        draft.priority = priority;
    }
    if let Some(tags) = fields.tags.as_deref() {
        draft.tags = parse_tags(tags);
    }

    let intent = Intent::UpdateCard {
        ws_id,
        card_id: card_id.clone(),
        draft,
    };
    if ctl.dispatch(intent, |_| false)? == Applied::Changed {
        println!("Updated {}", card_id);
    }
    Ok(())
}

pub fn remove(ws: &str, card: &str, yes: bool) -> Result<()> {
    let (mut ctl, config) = open_board()?;
    let mode = ConfirmMode::new(yes, config.confirm_deletes);
    remove_impl(&mut ctl, ws, card, |question| mode.confirm(question))
}

pub(crate) fn remove_impl<S: Store>(
    ctl: &mut BoardController<S>,
    ws: &str,
    card: &str,
    confirm: impl FnOnce(&str) -> bool,
) -> Result<()> {
    let Some((ws_id, card_id)) = lane_and_card(ctl, ws, card)? else {
        return Ok(());
    };
    let intent = Intent::DeleteCard {
        ws_id,
        card_id: card_id.clone(),
    };
    match ctl.dispatch(intent, |c| confirm(&c.message()))? {
        Applied::Unchanged => println!("Kept {}", card_id),
        _ => println!("Deleted {}", card_id),
    }
    Ok(())
}

pub fn move_to(card: &str, status: &str, index: Option<usize>, lane: Option<&str>) -> Result<()> {
    let (mut ctl, _) = open_board()?;
    move_impl(&mut ctl, card, status, index, lane)
}

/// Drop a card into a column, at `index` within that column or at its end.
pub(crate) fn move_impl<S: Store>(
    ctl: &mut BoardController<S>,
    card: &str,
    status: &str,
    index: Option<usize>,
    lane: Option<&str>,
) -> Result<()> {
    let to_status = status.parse::<Status>()?;
    let new_index = index.unwrap_or(usize::MAX);

    let Some(card_id) = resolve::card_id(ctl.board(), card)? else {
        return report_missing("card", card);
    };
    let Some(from_status) = ctl.board().find_card(&card_id).map(|(_, c)| c.status) else {
        return report_missing("card", card);
    };

    let intent = match lane {
        Some(lane) => {
            let Some(to_ws_id) = lane_id(ctl, lane)? else {
                return report_missing("lane", lane);
            };
            Intent::TransferCard {
                card_id: card_id.clone(),
                to_ws_id,
                to_status,
                new_index,
            }
        }
        None => Intent::MoveCard {
            card_id: card_id.clone(),
            from_status,
            to_status,
            new_index,
        },
    };
    if ctl.dispatch(intent, |_| false)? == Applied::Changed {
        println!("Moved {} to {}", card_id, to_status.label());
    }
    Ok(())
}

pub fn tag(ws: &str, card: &str, tag: &str) -> Result<()> {
    let (mut ctl, _) = open_board()?;
    tag_impl(&mut ctl, ws, card, tag)
}

pub(crate) fn tag_impl<S: Store>(
    ctl: &mut BoardController<S>,
    ws: &str,
    card: &str,
    tag: &str,
) -> Result<()> {
    let Some((ws_id, card_id)) = lane_and_card(ctl, ws, card)? else {
        return Ok(());
    };
    let intent = Intent::AddTag {
        ws_id,
        card_id: card_id.clone(),
        tag: tag.to_string(),
    };
    match ctl.dispatch(intent, |_| false)? {
        Applied::Unchanged => println!("{} already tagged {}", card_id, tag.trim()),
        _ => println!("Tagged {} with {}", card_id, tag.trim()),
    }
    Ok(())
}

pub fn untag(ws: &str, card: &str, tag: &str) -> Result<()> {
    let (mut ctl, _) = open_board()?;
    untag_impl(&mut ctl, ws, card, tag)
}

pub(crate) fn untag_impl<S: Store>(
    ctl: &mut BoardController<S>,
    ws: &str,
    card: &str,
    tag: &str,
) -> Result<()> {
    let Some((ws_id, card_id)) = lane_and_card(ctl, ws, card)? else {
        return Ok(());
    };
    let intent = Intent::RemoveTag {
        ws_id,
        card_id: card_id.clone(),
        tag: tag.to_string(),
    };
    match ctl.dispatch(intent, |_| false)? {
        Applied::Unchanged => println!("Tag {} not found on {}", tag.trim(), card_id),
        _ => println!("Removed tag {} from {}", tag.trim(), card_id),
    }
    Ok(())
}

#[cfg(test)]
#[path = "card_tests.rs"]
mod tests;
