use super::SnapshotStore;
use crate::error::{BoardError, Result};
use crate::model::Snapshot;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_RECORD_NAME: &str = "canvas-storage";

/// Normalizes a record name: trims it and drops a trailing `.json`.
/// Returns `None` for blank names and names with path separators, which
/// would place the record outside the data directory.
pub fn record_name(name: &str) -> Option<&str> {
    let name = name.trim();
    let name = name.strip_suffix(".json").unwrap_or(name);
    if name.is_empty() || name.contains(['/', '\\']) {
        return None;
    }
    Some(name)
}

pub struct FileStore {
    root: PathBuf,
    name: String,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            name: DEFAULT_RECORD_NAME.to_string(),
        }
    }

    /// Use a different record name; a trailing `.json` is accepted and dropped.
    /// Names rejected by [`record_name`] keep the current one.
    pub fn with_name(mut self, name: &str) -> Self {
        match record_name(name) {
            Some(valid) => self.name = valid.to_string(),
            None if !name.trim().is_empty() => {
                warn!(name, "ignoring invalid record name");
            }
            None => {}
        }
        self
    }

    pub fn record_path(&self) -> PathBuf {
        self.root.join(format!("{}.json", self.name))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(BoardError::Io)?;
        }
        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        let path = self.record_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(BoardError::Io)?;
        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(BoardError::Serialization)?;
        Ok(Some(snapshot))
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.ensure_dir()?;

        let path = self.record_path();
        let content = serde_json::to_string_pretty(snapshot).map_err(BoardError::Serialization)?;

        // Readers never see a partially written record
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(BoardError::Io)?;
        fs::rename(&tmp, &path).map_err(BoardError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Note, NoteColor, Page};
    use std::sync::Arc;

    fn sample_snapshot() -> Snapshot {
        let mut page = Page::new("Ideas");
        page.notes.push(Arc::new(
            Note::new("n1", 10.0, 20.0, NoteColor::Yellow).with_content("**buy** milk"),
        ));
        let other = Page::new("Later");
        Snapshot {
            current_page_id: Some(page.id.clone()),
            pages: vec![Arc::new(page), Arc::new(other)],
            is_sidebar_open: false,
        }
    }

    #[test]
    fn load_missing_record_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nothing-here"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_reproduces_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("board"));
        let snapshot = sample_snapshot();

        store.save(&snapshot).unwrap();
        let loaded = store.load().unwrap().unwrap();

        assert_eq!(loaded, snapshot);
        assert!(!store.record_path().with_extension("json.tmp").exists());
    }

    #[test]
    fn save_overwrites_whole_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.save(&sample_snapshot()).unwrap();
        store.save(&Snapshot::default()).unwrap();

        assert_eq!(store.load().unwrap().unwrap(), Snapshot::default());
    }

    #[test]
    fn corrupt_record_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        fs::write(store.record_path(), "{ not json").unwrap();

        assert!(matches!(store.load(), Err(BoardError::Serialization(_))));
    }

    #[test]
    fn record_name_is_configurable() {
        let store = FileStore::new("/tmp/x").with_name("notes.json");
        assert_eq!(store.record_path(), PathBuf::from("/tmp/x/notes.json"));

        let store = FileStore::new("/tmp/x").with_name("  ");
        assert_eq!(
            store.record_path(),
            PathBuf::from("/tmp/x/canvas-storage.json")
        );
    }

    #[test]
    fn record_name_cannot_leave_data_dir() {
        assert_eq!(record_name(" work.json "), Some("work"));
        assert_eq!(record_name("../elsewhere"), None);
        assert_eq!(record_name("a\\b"), None);
        assert_eq!(record_name(".json"), None);

        let store = FileStore::new("/tmp/x").with_name("../elsewhere");
        assert_eq!(
            store.record_path(),
            PathBuf::from("/tmp/x/canvas-storage.json")
        );
    }
}
