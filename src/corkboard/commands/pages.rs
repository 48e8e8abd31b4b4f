use super::helpers::{clean_name, require_page};
use crate::board::Board;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BoardError, Result};
use crate::index::index_pages;
use crate::store::SnapshotStore;
use std::sync::Arc;

pub fn list<S: SnapshotStore>(board: &Board<S>) -> CmdResult {
    let snapshot = board.snapshot();
    CmdResult::default().with_listed_pages(index_pages(&snapshot))
}

pub fn add<S: SnapshotStore>(board: &mut Board<S>, name: &str) -> Result<CmdResult> {
    let name = clean_name(name)?;
    board.add_page(name.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Page created: {}", name)));
    let snapshot = board.snapshot();
    if let (Some(current), Some(added)) = (snapshot.current_page(), snapshot.pages.last()) {
        if Arc::ptr_eq(current, added) {
            result.add_message(CmdMessage::info(format!("{} is now the current page", name)));
        }
    }
    Ok(result)
}

pub fn switch<S: SnapshotStore>(board: &mut Board<S>, reference: &str) -> Result<CmdResult> {
    let page = require_page(&board.snapshot(), reference)?;
    board.set_current_page(page.id.clone());
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Current page: {}",
        page.name
    ))))
}

pub fn rename<S: SnapshotStore>(
    board: &mut Board<S>,
    reference: &str,
    name: &str,
) -> Result<CmdResult> {
    let page = require_page(&board.snapshot(), reference)?;
    let name = clean_name(name)?;
    board.rename_page(&page.id, name.clone());
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Page renamed: {} -> {}",
        page.name, name
    ))))
}

pub fn delete<S: SnapshotStore>(board: &mut Board<S>, reference: &str) -> Result<CmdResult> {
    let page = require_page(&board.snapshot(), reference)?;
    board.delete_page(&page.id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Page deleted: {} ({} notes)",
        page.name,
        page.notes.len()
    )));

    let snapshot = board.snapshot();
    match snapshot.current_page() {
        Some(current) => result.add_message(CmdMessage::info(format!(
            "Current page: {}",
            current.name
        ))),
        None => result.add_message(CmdMessage::warning("No pages left")),
    }
    Ok(result)
}

/// Moves a page to a 1-based position, shifting the pages in between.
pub fn move_to<S: SnapshotStore>(
    board: &mut Board<S>,
    reference: &str,
    position: usize,
) -> Result<CmdResult> {
    let snapshot = board.snapshot();
    let page = require_page(&snapshot, reference)?;
    let count = snapshot.pages.len();
    if position == 0 || position > count {
        return Err(BoardError::Api(format!(
            "Position {} is out of range (1-{})",
            position, count
        )));
    }

    let from = snapshot
        .page_index(&page.id)
        .ok_or_else(|| BoardError::Api(format!("Page {} not found", reference)))?;
    let mut order = snapshot.pages.clone();
    let moved = order.remove(from);
    order.insert(position - 1, moved);
    board.reorder_pages(order);

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Page moved: {} -> position {}",
        page.name, position
    ))))
}

pub fn toggle_sidebar<S: SnapshotStore>(board: &mut Board<S>) -> CmdResult {
    board.toggle_sidebar();
    let state = if board.snapshot().is_sidebar_open {
        "open"
    } else {
        "closed"
    };
    CmdResult::default().with_message(CmdMessage::success(format!("Sidebar {}", state)))
}
