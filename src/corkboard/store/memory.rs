use super::SnapshotStore;
use crate::error::{BoardError, Result};
use crate::model::Snapshot;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: Option<Snapshot>,
    save_count: usize,
    failing: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `snapshot` already persisted.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            saved: Some(snapshot),
            ..Self::default()
        }
    }

    /// Every load and save fails, as if storage were unavailable.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    pub fn saved(&self) -> Option<&Snapshot> {
        self.saved.as_ref()
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }

    fn unavailable() -> BoardError {
        BoardError::Store("in-memory store is unavailable".to_string())
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        if self.failing {
            return Err(Self::unavailable());
        }
        Ok(self.saved.clone())
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        if self.failing {
            return Err(Self::unavailable());
        }
        self.saved = Some(snapshot.clone());
        self.save_count += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::board::Board;
    use crate::model::{Note, NoteColor};

    pub struct BoardFixture {
        pub board: Board<InMemoryStore>,
    }

    impl Default for BoardFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BoardFixture {
        /// An empty board; no default page is created.
        pub fn new() -> Self {
            Self {
                board: Board::new(InMemoryStore::new(), Snapshot::default()),
            }
        }

        pub fn with_pages(mut self, names: &[&str]) -> Self {
            for name in names {
                self.board.add_page(*name);
            }
            self
        }

        /// Adds notes `n1..=nN` to the named page, laid out on a diagonal.
        pub fn with_notes(mut self, page_name: &str, count: usize) -> Self {
            let page_id = self.page_id(page_name);
            for i in 1..=count {
                let offset = (i * 10) as f64;
                let note = Note::new(format!("n{}", i), offset, offset, NoteColor::Yellow)
                    .with_content(format!("Note {}", i));
                self.board.add_note(&page_id, note);
            }
            self
        }

        pub fn page_id(&self, name: &str) -> String {
            self.board
                .snapshot()
                .pages
                .iter()
                .find(|p| p.name == name)
                .map(|p| p.id.clone())
                .unwrap_or_else(|| panic!("fixture page `{}` not found", name))
        }

        pub fn into_board(self) -> Board<InMemoryStore> {
            self.board
        }
    }
}
