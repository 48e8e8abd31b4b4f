//! Inline formatting markers for note content.
//!
//! Notes are plain text; emphasis is written inline as `**bold**`, `*italic*`
//! and `_underline_`. This module only inserts the markers around a selection,
//! rendering them is up to the client.

use crate::error::{BoardError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Bold,
    Italic,
    Underline,
}

impl Format {
    pub fn symbol(&self) -> &'static str {
        match self {
            Format::Bold => "**",
            Format::Italic => "*",
            Format::Underline => "_",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Bold => "bold",
            Format::Italic => "italic",
            Format::Underline => "underline",
        };
        f.write_str(name)
    }
}

impl FromStr for Format {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bold" | "b" => Ok(Format::Bold),
            "italic" | "i" => Ok(Format::Italic),
            "underline" | "u" => Ok(Format::Underline),
            other => Err(BoardError::Api(format!(
                "Unknown format `{}` (expected bold, italic or underline)",
                other
            ))),
        }
    }
}

/// Wraps the characters `start..end` of `content` in the markers for `format`.
///
/// Offsets count characters, not bytes. An empty or out-of-range selection
/// returns `None`.
pub fn apply_format(content: &str, start: usize, end: usize, format: Format) -> Option<String> {
    if start >= end || end > content.chars().count() {
        return None;
    }

    let byte_at = |pos: usize| {
        content
            .char_indices()
            .nth(pos)
            .map(|(b, _)| b)
            .unwrap_or(content.len())
    };
    let (from, to) = (byte_at(start), byte_at(end));
    let symbol = format.symbol();

    Some(format!(
        "{}{}{}{}{}",
        &content[..from],
        symbol,
        &content[from..to],
        symbol,
        &content[to..]
    ))
}
