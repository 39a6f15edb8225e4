// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod card;
pub mod init;
pub mod lane;
pub mod schema;
pub mod show;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use kb_core::{BoardController, FileStore, Store};

use crate::config::{find_work_dir, get_board_path, Config};
use crate::error::{Error, Result};
use crate::resolve;

/// Helper to open the board from the current context.
pub fn open_board() -> Result<(BoardController<FileStore>, Config)> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let board_path = get_board_path(&work_dir, &config);
    tracing::debug!("opening board at {}", board_path.display());
    let ctl = BoardController::open(FileStore::new(board_path))?;
    Ok((ctl, config))
}

/// Print the "not found" notice for an id that matched nothing.
///
/// Missing ids are not failures: the command exits successfully.
pub(crate) fn report_missing(kind: &'static str, id: &str) -> Result<()> {
    println!(
        "{}",
        Error::NotFound {
            kind,
            id: id.to_string()
        }
    );
    Ok(())
}

/// Resolve a lane argument, or `None` if nothing matches.
pub(crate) fn lane_id<S: Store>(ctl: &BoardController<S>, ws: &str) -> Result<Option<String>> {
    resolve::workstream_id(ctl.board(), ws)
}

/// Resolve a lane and a card inside it.
pub(crate) fn lane_and_card<S: Store>(
    ctl: &BoardController<S>,
    ws: &str,
    card: &str,
) -> Result<Option<(String, String)>> {
    let Some(ws_id) = lane_id(ctl, ws)? else {
        report_missing("lane", ws)?;
        return Ok(None);
    };
    let Some(lane) = ctl.board().workstream(&ws_id) else {
        report_missing("lane", ws)?;
        return Ok(None);
    };
    let Some(card_id) = resolve::card_id_in(lane, card)? else {
        report_missing("card", card)?;
        return Ok(None);
    };
    Ok(Some((ws_id, card_id)))
}
