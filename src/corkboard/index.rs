//! # Display Indexes
//!
//! Ids are UUIDs, which nobody wants to type. Clients show pages and notes with
//! a 1-based position instead and accept either form back:
//!
//! - `2` selects the second page (or the second note of the current page)
//! - `3f9c1a2e-...` selects by full id
//! - `3f9c` selects by id prefix, as long as exactly one entity matches
//!
//! A number that is out of range is retried as an id, so boards whose ids are
//! plain digits stay addressable.

use crate::model::{Note, Page, Snapshot};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Number of id characters clients show.
pub const SHORT_ID_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityRef {
    Position(usize),
    Id(String),
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityRef::Position(n) => write!(f, "{}", n),
            EntityRef::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for EntityRef {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.parse::<usize>() {
            Ok(n) if n > 0 => Ok(EntityRef::Position(n)),
            _ => Ok(EntityRef::Id(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplayPage {
    pub position: usize,
    pub page: Arc<Page>,
    pub is_current: bool,
}

#[derive(Debug, Clone)]
pub struct DisplayNote {
    pub position: usize,
    pub note: Arc<Note>,
}

pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

/// Pages in display order, numbered from 1.
pub fn index_pages(snapshot: &Snapshot) -> Vec<DisplayPage> {
    let current = snapshot.current_page_id.as_deref();
    snapshot
        .pages
        .iter()
        .enumerate()
        .map(|(i, page)| DisplayPage {
            position: i + 1,
            page: Arc::clone(page),
            is_current: current == Some(page.id.as_str()),
        })
        .collect()
}

/// Notes of a page in z-order, numbered from 1.
pub fn index_notes(page: &Page) -> Vec<DisplayNote> {
    page.notes
        .iter()
        .enumerate()
        .map(|(i, note)| DisplayNote {
            position: i + 1,
            note: Arc::clone(note),
        })
        .collect()
}

pub fn resolve_page<'a>(snapshot: &'a Snapshot, reference: &EntityRef) -> Option<&'a Arc<Page>> {
    resolve(&snapshot.pages, reference, |p| p.id.as_str())
}

pub fn resolve_note<'a>(page: &'a Page, reference: &EntityRef) -> Option<&'a Arc<Note>> {
    resolve(&page.notes, reference, |n| n.id.as_str())
}

fn resolve<'a, T, F>(items: &'a [Arc<T>], reference: &EntityRef, id_of: F) -> Option<&'a Arc<T>>
where
    F: Fn(&T) -> &str,
{
    let wanted = match reference {
        EntityRef::Position(n) => {
            if let Some(item) = n.checked_sub(1).and_then(|i| items.get(i)) {
                return Some(item);
            }
            n.to_string()
        }
        EntityRef::Id(id) => id.clone(),
    };

    if wanted.is_empty() {
        return None;
    }
    if let Some(item) = items.iter().find(|item| id_of(item.as_ref()) == wanted) {
        return Some(item);
    }

    let mut prefixed = items
        .iter()
        .filter(|item| id_of(item.as_ref()).starts_with(wanted.as_str()));
    match (prefixed.next(), prefixed.next()) {
        (Some(item), None) => Some(item),
        _ => None,
    }
}
