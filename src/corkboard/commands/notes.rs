use super::helpers::{current_page, require_note};
use crate::board::Board;
use crate::canvas::Viewport;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{index_notes, short_id};
use crate::markup::{apply_format, Format};
use crate::model::{new_id, Note, NoteColor, NotePatch};
use crate::store::SnapshotStore;

/// What a client knows when it asks for a new note.
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub content: String,
    pub x: f64,
    pub y: f64,
    /// Random palette entry when unset.
    pub color: Option<NoteColor>,
}

pub fn list<S: SnapshotStore>(board: &Board<S>) -> Result<CmdResult> {
    let page = current_page(&board.snapshot())?;
    let notes = index_notes(&page);
    let mut result = CmdResult::default().with_listed_notes(page.name.clone(), notes);
    if result.listed_notes.is_empty() {
        result.add_message(CmdMessage::info("No notes yet. Add one with `note add`"));
    }
    Ok(result)
}

pub fn add<S: SnapshotStore>(board: &mut Board<S>, draft: NoteDraft) -> Result<CmdResult> {
    let page = current_page(&board.snapshot())?;
    let color = draft.color.unwrap_or_else(NoteColor::random);
    let note = Note::new(new_id(), draft.x, draft.y, color).with_content(draft.content);
    let id = note.id.clone();
    board.add_note(&page.id, note);

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Note added ({}) to {}",
        short_id(&id),
        page.name
    ))))
}

pub fn edit<S: SnapshotStore>(
    board: &mut Board<S>,
    reference: &str,
    content: &str,
) -> Result<CmdResult> {
    let (page, note) = require_note(&board.snapshot(), reference)?;
    board.update_note(&page.id, &note.id, NotePatch::new().content(content));
    Ok(updated(&note.id, "text"))
}

/// Moves a note by a screen-space drag; the viewport converts it to page units.
pub fn move_by<S: SnapshotStore>(
    board: &mut Board<S>,
    reference: &str,
    dx: f64,
    dy: f64,
    viewport: &Viewport,
) -> Result<CmdResult> {
    let (page, note) = require_note(&board.snapshot(), reference)?;
    let (dx, dy) = viewport.to_page_delta(dx, dy);
    let (x, y) = (note.x + dx, note.y + dy);
    board.update_note(&page.id, &note.id, NotePatch::new().position(x, y));

    let mut message = format!("Note moved ({}) to {:.1}, {:.1}", short_id(&note.id), x, y);
    if viewport.percent() != 100 {
        message.push_str(&format!(" (dragged at {}%)", viewport.percent()));
    }
    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}

/// Sets the rotation, or adds to it when `relative` is true.
pub fn rotate<S: SnapshotStore>(
    board: &mut Board<S>,
    reference: &str,
    degrees: f64,
    relative: bool,
) -> Result<CmdResult> {
    let (page, note) = require_note(&board.snapshot(), reference)?;
    let rotation = if relative {
        note.rotation + degrees
    } else {
        degrees
    };
    board.update_note(&page.id, &note.id, NotePatch::new().rotation(rotation));
    Ok(updated(&note.id, "rotation"))
}

pub fn recolor<S: SnapshotStore>(
    board: &mut Board<S>,
    reference: &str,
    color: NoteColor,
) -> Result<CmdResult> {
    let (page, note) = require_note(&board.snapshot(), reference)?;
    board.update_note(&page.id, &note.id, NotePatch::new().color(color));
    Ok(updated(&note.id, "color"))
}

pub fn format<S: SnapshotStore>(
    board: &mut Board<S>,
    reference: &str,
    format: Format,
    start: usize,
    end: usize,
) -> Result<CmdResult> {
    let (page, note) = require_note(&board.snapshot(), reference)?;
    let Some(content) = apply_format(&note.content, start, end, format) else {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Nothing to format: selection {}..{} is empty or outside the text",
            start, end
        ))));
    };
    board.update_note(&page.id, &note.id, NotePatch::new().content(content));
    Ok(updated(&note.id, &format.to_string()))
}

pub fn delete<S: SnapshotStore>(board: &mut Board<S>, reference: &str) -> Result<CmdResult> {
    let (page, note) = require_note(&board.snapshot(), reference)?;
    board.delete_note(&page.id, &note.id);
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Note deleted ({})",
        short_id(&note.id)
    ))))
}

fn updated(note_id: &str, what: &str) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::success(format!(
        "Note updated ({}): {}",
        short_id(note_id),
        what
    )))
}
