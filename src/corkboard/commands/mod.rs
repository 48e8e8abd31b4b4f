//! # Commands
//!
//! Presentation-side operations built on top of [`Board`](crate::board::Board).
//! The board's mutations take exact ids and return nothing; a client works with
//! what the user typed. Each command here resolves user references, validates
//! input, calls the board mutation and reports back in a [`CmdResult`].
//!
//! Commands never print. Errors are for user input that cannot be acted on
//! (unknown page, empty name); the board itself never fails.

use crate::config::BoardConfig;
use crate::index::{DisplayNote, DisplayPage};

pub mod config;
pub mod helpers;
pub mod notes;
pub mod pages;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_pages: Vec<DisplayPage>,
    pub listed_notes: Vec<DisplayNote>,
    /// Name of the page whose notes are listed.
    pub page_name: Option<String>,
    pub config: Option<BoardConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_pages(mut self, pages: Vec<DisplayPage>) -> Self {
        self.listed_pages = pages;
        self
    }

    pub fn with_listed_notes(mut self, page_name: String, notes: Vec<DisplayNote>) -> Self {
        self.page_name = Some(page_name);
        self.listed_notes = notes;
        self
    }

    pub fn with_config(mut self, config: BoardConfig) -> Self {
        self.config = Some(config);
        self
    }
}
