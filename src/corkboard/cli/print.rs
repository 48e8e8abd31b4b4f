use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use corkboard::commands::{CmdMessage, MessageLevel};
use corkboard::config::{BoardConfig, CONFIG_KEYS};
use corkboard::index::{short_id, DisplayNote, DisplayPage};
use corkboard::model::NoteColor;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const CURRENT_MARKER: &str = "▸";
const NOTE_SWATCH: &str = "●";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_pages(pages: &[DisplayPage]) {
    if pages.is_empty() {
        println!("No pages found.");
        return;
    }

    for dp in pages {
        let left_prefix = if dp.is_current {
            format!("  {} ", CURRENT_MARKER)
        } else {
            "    ".to_string()
        };
        let idx_str = format!("{}. ", dp.position);
        let count = match dp.page.notes.len() {
            1 => "1 note".to_string(),
            n => format!("{} notes", n),
        };
        let count_str = format!("  {}", count);

        let time_ago = dp
            .page
            .created_at_utc()
            .map(format_time_ago)
            .unwrap_or_else(|| " ".repeat(TIME_WIDTH));

        let fixed_width =
            left_prefix.width() + idx_str.width() + count_str.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let name_display = truncate_to_width(&dp.page.name, available);
        let padding = available.saturating_sub(name_display.width());

        let (idx_colored, name_colored) = if dp.is_current {
            (idx_str.yellow(), name_display.bold())
        } else {
            (idx_str.normal(), name_display.normal())
        };

        println!(
            "{}{}{}{}{}{}",
            left_prefix,
            idx_colored,
            name_colored,
            " ".repeat(padding),
            count_str.dimmed(),
            time_ago.dimmed()
        );
    }
}

pub(super) fn print_notes(page_name: &str, notes: &[DisplayNote]) {
    println!("{}", page_name.bold());
    println!("--------------------------------");

    for dn in notes {
        let note = &dn.note;
        let idx_str = format!("{:>3}. ", dn.position);
        let id_str = format!("{}  ", short_id(&note.id));
        let mut placement = format!("({:.0}, {:.0})", note.x, note.y);
        if note.rotation != 0.0 {
            placement.push_str(&format!(" ↻{:.0}°", note.rotation));
        }
        let placement = format!("  {}", placement);

        let preview: String = note
            .content
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let fixed_width = idx_str.width() + 2 + id_str.width() + placement.width();
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let preview = truncate_to_width(&preview, available);
        let padding = available.saturating_sub(preview.width());

        println!(
            "{}{} {}{}{}{}",
            idx_str,
            swatch(note.color),
            id_str.dimmed(),
            preview,
            " ".repeat(padding),
            placement.dimmed()
        );
    }
}

pub(super) fn print_config(config: &BoardConfig) {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn swatch(color: NoteColor) -> ColoredString {
    match color {
        NoteColor::Yellow => NOTE_SWATCH.yellow(),
        NoteColor::Pink => NOTE_SWATCH.bright_magenta(),
        NoteColor::Blue => NOTE_SWATCH.blue(),
        NoteColor::Green => NOTE_SWATCH.green(),
        NoteColor::Purple => NOTE_SWATCH.magenta(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
