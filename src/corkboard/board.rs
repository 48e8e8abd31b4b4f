//! # The Board
//!
//! [`Board`] is the state store: it owns the current [`Snapshot`] and is the only
//! way to change it. Every mutation builds a new snapshot and swaps it in, so a
//! snapshot handed out earlier never changes underneath its reader.
//!
//! ## Mutation contract
//!
//! - Operations are total. A reference to a page or note that does not exist
//!   is a no-op: the previous snapshot stays in place (pointer-identical) and
//!   nothing is written.
//! - Only the path from the root to the changed entity is rebuilt; every other
//!   page and note is shared with the previous snapshot through its `Arc`.
//! - After each effective mutation the whole snapshot is handed to the
//!   [`SnapshotStore`]. A failed save is logged and otherwise ignored; the
//!   in-memory snapshot stays authoritative.

use crate::config::BoardConfig;
use crate::model::{Note, NotePatch, Page, Snapshot};
use crate::store::SnapshotStore;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct Board<S: SnapshotStore> {
    state: Arc<Snapshot>,
    store: S,
}

impl<S: SnapshotStore> Board<S> {
    /// Wraps an existing snapshot without touching the store.
    pub fn new(store: S, snapshot: Snapshot) -> Self {
        Self {
            state: Arc::new(snapshot),
            store,
        }
    }

    /// Hydrates a board from `store`.
    ///
    /// The store is read once. An absent or unreadable record yields an empty
    /// board, and an empty board always gets one page named
    /// `config.default_page_name`.
    pub fn open(store: S, config: &BoardConfig) -> Self {
        let empty = Snapshot {
            is_sidebar_open: config.start_with_sidebar_open,
            ..Snapshot::default()
        };

        let mut snapshot = match store.load() {
            Ok(Some(snapshot)) => {
                info!(pages = snapshot.pages.len(), "hydrated board");
                snapshot
            }
            Ok(None) => {
                info!("no persisted board, starting empty");
                empty
            }
            Err(err) => {
                warn!(error = %err, "could not load persisted board, starting empty");
                empty
            }
        };

        if snapshot.current_page_id.is_some() && snapshot.current_page().is_none() {
            let fallback = snapshot.pages.first().map(|p| p.id.clone());
            warn!(
                current = ?snapshot.current_page_id,
                fallback = ?fallback,
                "persisted current page does not exist"
            );
            snapshot.current_page_id = fallback;
        }

        let mut board = Self::new(store, snapshot);
        if board.state.is_empty() {
            board.add_page(config.default_page_name.clone());
        }
        board
    }

    /// The current snapshot. Cheap to call; the returned value never changes.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.state)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Appends a new page. It becomes current only when no page is current.
    pub fn add_page(&mut self, name: impl Into<String>) {
        let page = Page::new(name);
        let mut next = self.fork();
        if next.current_page_id.is_none() {
            next.current_page_id = Some(page.id.clone());
        }
        next.pages.push(Arc::new(page));
        self.commit("add_page", Some(next));
    }

    /// Sets the current page. The id is not checked against existing pages.
    pub fn set_current_page(&mut self, id: impl Into<String>) {
        let mut next = self.fork();
        next.current_page_id = Some(id.into());
        self.commit("set_current_page", Some(next));
    }

    pub fn rename_page(&mut self, id: &str, name: impl Into<String>) {
        let name = name.into();
        let next = self.with_page(id, |page| {
            Some(Page {
                name,
                ..page.clone()
            })
        });
        self.commit("rename_page", next);
    }

    /// Removes a page and its notes. When the current page goes, the first
    /// remaining page takes over, or no page at all.
    pub fn delete_page(&mut self, id: &str) {
        let next = self.state.page_index(id).map(|idx| {
            let mut next = self.fork();
            next.pages.remove(idx);
            if next.current_page_id.as_deref() == Some(id) {
                next.current_page_id = next.pages.first().map(|p| p.id.clone());
            }
            next
        });
        self.commit("delete_page", next);
    }

    /// Replaces the page list wholesale. `new_order` is trusted to be a
    /// permutation of the current pages.
    pub fn reorder_pages(&mut self, new_order: Vec<Arc<Page>>) {
        let mut next = self.fork();
        next.pages = new_order;
        self.commit("reorder_pages", Some(next));
    }

    /// Appends a caller-built note to a page.
    pub fn add_note(&mut self, page_id: &str, note: Note) {
        let next = self.with_page(page_id, |page| {
            if page.note(&note.id).is_some() {
                warn!(page = page_id, note = %note.id, "note id already on page, ignoring");
                return None;
            }
            let mut page = page.clone();
            page.notes.push(Arc::new(note));
            Some(page)
        });
        self.commit("add_note", next);
    }

    /// Merges `patch` into a note, producing a fresh note and page.
    pub fn update_note(&mut self, page_id: &str, note_id: &str, patch: NotePatch) {
        let next = self.with_page(page_id, |page| {
            let idx = page.note_index(note_id)?;
            let mut page = page.clone();
            page.notes[idx] = Arc::new(page.notes[idx].patched(&patch));
            Some(page)
        });
        self.commit("update_note", next);
    }

    pub fn delete_note(&mut self, page_id: &str, note_id: &str) {
        let next = self.with_page(page_id, |page| {
            let idx = page.note_index(note_id)?;
            let mut page = page.clone();
            page.notes.remove(idx);
            Some(page)
        });
        self.commit("delete_note", next);
    }

    pub fn toggle_sidebar(&mut self) {
        let mut next = self.fork();
        next.is_sidebar_open = !next.is_sidebar_open;
        self.commit("toggle_sidebar", Some(next));
    }

    // A shallow copy: the page list is new, the pages in it are shared.
    fn fork(&self) -> Snapshot {
        (*self.state).clone()
    }

    fn with_page<F>(&self, page_id: &str, f: F) -> Option<Snapshot>
    where
        F: FnOnce(&Page) -> Option<Page>,
    {
        let idx = self.state.page_index(page_id)?;
        let page = f(&self.state.pages[idx])?;
        let mut next = self.fork();
        next.pages[idx] = Arc::new(page);
        Some(next)
    }

    fn commit(&mut self, op: &'static str, next: Option<Snapshot>) {
        let Some(next) = next else {
            debug!(op, "nothing matched, snapshot unchanged");
            return;
        };

        self.state = Arc::new(next);
        debug!(op, pages = self.state.pages.len(), "snapshot replaced");

        if let Err(err) = self.store.save(&self.state) {
            warn!(op, error = %err, "failed to persist board, keeping in-memory state");
        }
    }
}
