//! # Storage Layer
//!
//! The board keeps its state in memory and hands every new [`Snapshot`] to a
//! [`SnapshotStore`] for durable storage. The trait is the persistence adapter
//! boundary: the board never knows where the bytes go.
//!
//! ## Contract
//!
//! - `load` is called exactly once, when the board is opened. `Ok(None)` means
//!   nothing has been persisted yet.
//! - `save` is called after every effective mutation with the whole snapshot
//!   (overwrite, not incremental).
//! - Errors from either call are reported to the board, which logs them and
//!   keeps its in-memory state authoritative.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single named JSON record
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── canvas-storage.json   # { pages, currentPageId, isSidebarOpen }
//! └── config.json           # BoardConfig
//! ```

use crate::error::Result;
use crate::model::Snapshot;

pub mod fs;
pub mod memory;

/// Abstract interface for snapshot persistence.
pub trait SnapshotStore {
    /// Read the persisted snapshot, if any.
    fn load(&self) -> Result<Option<Snapshot>>;

    /// Overwrite the persisted snapshot.
    fn save(&mut self, snapshot: &Snapshot) -> Result<()>;
}
