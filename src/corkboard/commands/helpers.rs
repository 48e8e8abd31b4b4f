use crate::error::{BoardError, Result};
use crate::index::{resolve_note, resolve_page, EntityRef};
use crate::model::{Note, Page, Snapshot};
use std::str::FromStr;
use std::sync::Arc;

fn parse_ref(reference: &str) -> EntityRef {
    match EntityRef::from_str(reference) {
        Ok(parsed) => parsed,
        Err(never) => match never {},
    }
}

pub fn require_page(snapshot: &Snapshot, reference: &str) -> Result<Arc<Page>> {
    resolve_page(snapshot, &parse_ref(reference))
        .cloned()
        .ok_or_else(|| BoardError::Api(format!("Page {} not found", reference)))
}

pub fn current_page(snapshot: &Snapshot) -> Result<Arc<Page>> {
    snapshot
        .current_page()
        .cloned()
        .ok_or_else(|| BoardError::Api("No current page; pick one with `page use`".to_string()))
}

/// Looks a note up on the current page.
pub fn require_note(snapshot: &Snapshot, reference: &str) -> Result<(Arc<Page>, Arc<Note>)> {
    let page = current_page(snapshot)?;
    let note = resolve_note(&page, &parse_ref(reference))
        .cloned()
        .ok_or_else(|| {
            BoardError::Api(format!("Note {} not found on page {}", reference, page.name))
        })?;
    Ok((page, note))
}

/// Trims a page name and rejects blank ones.
pub fn clean_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BoardError::Api("Page name cannot be empty".into()));
    }
    Ok(name.to_string())
}
