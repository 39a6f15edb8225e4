// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use kb_core::{Applied, BoardController, Intent, Store};

use crate::error::Result;
use crate::prompt::ConfirmMode;

use super::{lane_id, open_board, report_missing};

pub fn new(name: &str) -> Result<()> {
    let (mut ctl, _) = open_board()?;
    new_impl(&mut ctl, name)
}

/// Internal implementation that accepts the controller for testing.
pub(crate) fn new_impl<S: Store>(ctl: &mut BoardController<S>, name: &str) -> Result<()> {
    let id = ctl.create_workstream(name)?;
    println!("Created lane {} ({})", name.trim(), id);
    Ok(())
}

pub fn rename(ws: &str, name: &str) -> Result<()> {
    let (mut ctl, _) = open_board()?;
    rename_impl(&mut ctl, ws, name)
}

pub(crate) fn rename_impl<S: Store>(
    ctl: &mut BoardController<S>,
    ws: &str,
    name: &str,
) -> Result<()> {
    let Some(ws_id) = lane_id(ctl, ws)? else {
        return report_missing("lane", ws);
    };
    if ctl.rename_workstream(&ws_id, name)? {
        println!("Renamed {} to {}", ws_id, name.trim());
    }
    Ok(())
}

pub fn remove(ws: &str, yes: bool) -> Result<()> {
    let (mut ctl, config) = open_board()?;
    let mode = ConfirmMode::new(yes, config.confirm_deletes);
    remove_impl(&mut ctl, ws, |question| mode.confirm(question))
}

/// Delete a lane, asking `confirm` first when it still holds cards.
pub(crate) fn remove_impl<S: Store>(
    ctl: &mut BoardController<S>,
    ws: &str,
    confirm: impl FnOnce(&str) -> bool,
) -> Result<()> {
    let Some(ws_id) = lane_id(ctl, ws)? else {
        return report_missing("lane", ws);
    };
    let intent = Intent::DeleteWorkstream {
        ws_id: ws_id.clone(),
    };
    match ctl.dispatch(intent, |c| confirm(&c.message()))? {
        Applied::Unchanged => println!("Kept lane {}", ws_id),
        _ => println!("Deleted lane {}", ws_id),
    }
    Ok(())
}

pub fn reorder(from: usize, to: usize) -> Result<()> {
    let (mut ctl, _) = open_board()?;
    reorder_impl(&mut ctl, from, to)
}

pub(crate) fn reorder_impl<S: Store>(
    ctl: &mut BoardController<S>,
    from: usize,
    to: usize,
) -> Result<()> {
    let intent = Intent::ReorderWorkstreams {
        old_index: Some(from),
        new_index: Some(to),
    };
    match ctl.dispatch(intent, |_| false)? {
        Applied::Unchanged => {
            let lanes = ctl.board().workstreams.len();
            println!("Lane order unchanged ({} lane(s), rows 0-based)", lanes);
        }
        _ => println!("Moved lane from row {} to row {}", from, to),
    }
    Ok(())
}

#[cfg(test)]
#[path = "lane_tests.rs"]
mod tests;
