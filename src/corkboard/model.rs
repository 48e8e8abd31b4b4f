//! Core data types: [`Note`], [`Page`] and the root [`Snapshot`].
//!
//! Pages and notes are held behind `Arc` so consecutive snapshots can share
//! everything a mutation did not touch. The serialized form uses camelCase keys
//! (`createdAt`, `currentPageId`, `isSidebarOpen`).

use crate::error::{BoardError, Result};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

/// Generates a fresh identifier for pages and notes.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    Yellow,
    Pink,
    Blue,
    Green,
    Purple,
}

impl NoteColor {
    pub const PALETTE: [NoteColor; 5] = [
        NoteColor::Yellow,
        NoteColor::Pink,
        NoteColor::Blue,
        NoteColor::Green,
        NoteColor::Purple,
    ];

    /// Picks a palette entry at random, the way new notes get their color.
    pub fn random() -> Self {
        let idx = rand::rng().random_range(0..Self::PALETTE.len());
        Self::PALETTE[idx]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteColor::Yellow => "yellow",
            NoteColor::Pink => "pink",
            NoteColor::Blue => "blue",
            NoteColor::Green => "green",
            NoteColor::Purple => "purple",
        }
    }
}

impl fmt::Display for NoteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteColor {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::PALETTE
            .iter()
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| {
                BoardError::Api(format!(
                    "Unknown color `{}` (expected one of: yellow, pink, blue, green, purple)",
                    s
                ))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub content: String,
    pub x: f64,
    pub y: f64,
    pub color: NoteColor,
    /// Degrees, never normalized.
    pub rotation: f64,
}

impl Note {
    pub fn new(id: impl Into<String>, x: f64, y: f64, color: NoteColor) -> Self {
        Self {
            id: id.into(),
            content: String::new(),
            x,
            y,
            color,
            rotation: 0.0,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Returns a copy of this note with every field set in `patch` replaced.
    pub fn patched(&self, patch: &NotePatch) -> Self {
        Self {
            id: self.id.clone(),
            content: patch
                .content
                .clone()
                .unwrap_or_else(|| self.content.clone()),
            x: patch.x.unwrap_or(self.x),
            y: patch.y.unwrap_or(self.y),
            color: patch.color.unwrap_or(self.color),
            rotation: patch.rotation.unwrap_or(self.rotation),
        }
    }
}

/// A partial update to the mutable fields of a [`Note`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotePatch {
    pub content: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub color: Option<NoteColor>,
    pub rotation: Option<f64>,
}

impl NotePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn position(self, x: f64, y: f64) -> Self {
        self.x(x).y(y)
    }

    pub fn color(mut self, color: NoteColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn rotation(mut self, rotation: f64) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.x.is_none()
            && self.y.is_none()
            && self.color.is_none()
            && self.rotation.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub notes: Vec<Arc<Note>>,
    /// Epoch milliseconds.
    pub created_at: i64,
}

impl Page {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            notes: Vec::new(),
            created_at: Utc::now().timestamp_millis(),
        }
    }

    pub fn note(&self, id: &str) -> Option<&Arc<Note>> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn note_index(&self, id: &str) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created_at)
    }
}

fn default_sidebar_open() -> bool {
    true
}

/// The complete root state. Only these three fields are ever persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub pages: Vec<Arc<Page>>,
    #[serde(default)]
    pub current_page_id: Option<String>,
    #[serde(default = "default_sidebar_open")]
    pub is_sidebar_open: bool,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            pages: Vec::new(),
            current_page_id: None,
            is_sidebar_open: default_sidebar_open(),
        }
    }
}

impl Snapshot {
    pub fn page(&self, id: &str) -> Option<&Arc<Page>> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn page_index(&self, id: &str) -> Option<usize> {
        self.pages.iter().position(|p| p.id == id)
    }

    /// The active page, if `current_page_id` names one that exists.
    pub fn current_page(&self) -> Option<&Arc<Page>> {
        self.current_page_id.as_deref().and_then(|id| self.page(id))
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_only_touches_given_fields() {
        let note = Note::new("n1", 10.0, 20.0, NoteColor::Yellow).with_content("hi");
        let patched = note.patched(&NotePatch::new().content("x"));

        assert_eq!(patched.content, "x");
        assert_eq!(patched.x, 10.0);
        assert_eq!(patched.y, 20.0);
        assert_eq!(patched.color, NoteColor::Yellow);
        assert_eq!(patched.rotation, 0.0);
        assert_eq!(patched.id, "n1");
    }

    #[test]
    fn rotation_is_not_normalized() {
        let note = Note::new("n1", 0.0, 0.0, NoteColor::Blue);
        let patched = note.patched(&NotePatch::new().rotation(725.5));
        assert_eq!(patched.rotation, 725.5);
    }

    #[test]
    fn empty_patch_detection() {
        assert!(NotePatch::new().is_empty());
        assert!(!NotePatch::new().x(1.0).is_empty());
    }

    #[test]
    fn color_parses_case_insensitively() {
        assert_eq!("Purple".parse::<NoteColor>().unwrap(), NoteColor::Purple);
        assert_eq!(" pink ".parse::<NoteColor>().unwrap(), NoteColor::Pink);
        assert!("orange".parse::<NoteColor>().is_err());
    }

    #[test]
    fn random_color_is_from_palette() {
        for _ in 0..20 {
            assert!(NoteColor::PALETTE.contains(&NoteColor::random()));
        }
    }

    #[test]
    fn snapshot_serializes_with_camel_case_keys() {
        let mut page = Page::new("Ideas");
        page.notes.push(Arc::new(Note::new("n1", 1.5, 2.5, NoteColor::Green)));
        let snapshot = Snapshot {
            current_page_id: Some(page.id.clone()),
            pages: vec![Arc::new(page)],
            is_sidebar_open: false,
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("currentPageId").is_some());
        assert_eq!(json["isSidebarOpen"], false);
        assert!(json["pages"][0].get("createdAt").is_some());
        assert_eq!(json["pages"][0]["notes"][0]["color"], "green");
    }

    #[test]
    fn snapshot_fills_missing_fields_with_defaults() {
        let parsed: Snapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, Snapshot::default());
        assert!(parsed.is_sidebar_open);
    }

    #[test]
    fn current_page_ignores_dangling_id() {
        let snapshot = Snapshot {
            current_page_id: Some("missing".into()),
            ..Snapshot::default()
        };
        assert!(snapshot.current_page().is_none());
    }

    #[test]
    fn page_ids_are_fresh() {
        let a = Page::new("a");
        let b = Page::new("b");
        assert_ne!(a.id, b.id);
        assert!(a.created_at_utc().is_some());
    }
}
