use clap::{Parser, Subcommand};
use corkboard::markup::Format;
use corkboard::model::NoteColor;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "corkboard")]
#[command(version, long_version = concat!(env!("CARGO_PKG_VERSION"), env!("CORKBOARD_BUILD")))]
#[command(about = "Sticky notes on pages, from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the board and its config
    #[arg(long, global = true, env = "CORKBOARD_HOME")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List pages
    #[command(alias = "ls")]
    Pages,

    /// Create, switch, rename, delete or reorder pages
    #[command(subcommand)]
    Page(PageCommands),

    /// Show the notes on the current page
    #[command(alias = "show")]
    Notes,

    /// Add and change notes on the current page
    #[command(subcommand)]
    Note(NoteCommands),

    /// Open or close the sidebar
    Sidebar,

    /// Get or set configuration
    Config {
        /// Configuration key (storage-name, default-page-name, sidebar-open)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PageCommands {
    /// Create a new page at the end of the list
    #[command(alias = "n")]
    Add {
        /// Page name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Make a page the current one
    #[command(alias = "switch")]
    Use {
        /// Page position (e.g. 2) or id
        page: String,
    },

    /// Rename a page
    Rename {
        /// Page position (e.g. 2) or id
        page: String,

        /// New name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Delete a page and all of its notes
    #[command(alias = "rm")]
    Delete {
        /// Page position (e.g. 2) or id
        page: String,
    },

    /// Move a page to another position in the list
    #[command(alias = "mv")]
    Move {
        /// Page position (e.g. 2) or id
        page: String,

        /// Target position, starting at 1
        position: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum NoteCommands {
    /// Add a note to the current page
    #[command(alias = "n", allow_negative_numbers = true)]
    Add {
        /// Note text
        content: Vec<String>,

        /// Horizontal position on the page
        #[arg(long, default_value_t = 0.0)]
        x: f64,

        /// Vertical position on the page
        #[arg(long, default_value_t = 0.0)]
        y: f64,

        /// Note color (random when omitted)
        #[arg(short, long)]
        color: Option<NoteColor>,
    },

    /// Replace the text of a note
    #[command(alias = "e")]
    Edit {
        /// Note position (e.g. 1) or id
        note: String,

        /// New text
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,
    },

    /// Drag a note by a screen-space offset
    #[command(alias = "mv", allow_negative_numbers = true)]
    Move {
        /// Note position (e.g. 1) or id
        note: String,

        /// Horizontal offset
        dx: f64,

        /// Vertical offset
        dy: f64,

        /// Zoom level the offset was measured at
        #[arg(long, default_value_t = 1.0)]
        scale: f64,

        /// Zoom-button presses (25% each) the offset was measured at
        #[arg(long, default_value_t = 0, conflicts_with = "scale")]
        zoom: i32,
    },

    /// Set (or with --by, adjust) a note's rotation in degrees
    #[command(allow_negative_numbers = true)]
    Rotate {
        /// Note position (e.g. 1) or id
        note: String,

        /// Degrees
        degrees: f64,

        /// Add to the current rotation instead of replacing it
        #[arg(long)]
        by: bool,
    },

    /// Change a note's color
    Color {
        /// Note position (e.g. 1) or id
        note: String,

        /// yellow, pink, blue, green or purple
        color: NoteColor,
    },

    /// Wrap part of a note's text in bold, italic or underline markers
    Format {
        /// Note position (e.g. 1) or id
        note: String,

        /// bold, italic or underline
        format: Format,

        /// First character of the selection (0-based)
        start: usize,

        /// Character after the selection
        end: usize,
    },

    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Note position (e.g. 1) or id
        note: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_move_offsets() {
        let cli = Cli::try_parse_from(["corkboard", "note", "move", "1", "-20", "15.5"]).unwrap();
        match cli.command {
            Some(Commands::Note(NoteCommands::Move { dx, dy, scale, .. })) => {
                assert_eq!((dx, dy, scale), (-20.0, 15.5, 1.0));
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn move_zoom_steps_exclude_scale() {
        let cli =
            Cli::try_parse_from(["corkboard", "note", "move", "1", "5", "5", "--zoom", "-2"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Note(NoteCommands::Move { zoom: -2, .. }))
        ));

        assert!(Cli::try_parse_from([
            "corkboard", "note", "move", "1", "5", "5", "--zoom", "1", "--scale", "2",
        ])
        .is_err());
    }

    #[test]
    fn parses_color_and_format_values() {
        let cli = Cli::try_parse_from(["corkboard", "note", "color", "2", "Pink"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Note(NoteCommands::Color {
                color: NoteColor::Pink,
                ..
            }))
        ));

        assert!(Cli::try_parse_from(["corkboard", "note", "color", "2", "teal"]).is_err());

        let cli =
            Cli::try_parse_from(["corkboard", "note", "format", "1", "italic", "0", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Note(NoteCommands::Format {
                format: Format::Italic,
                start: 0,
                end: 3,
                ..
            }))
        ));
    }

    #[test]
    fn page_names_join_words() {
        let cli = Cli::try_parse_from(["corkboard", "page", "add", "Weekend", "plans"]).unwrap();
        match cli.command {
            Some(Commands::Page(PageCommands::Add { name })) => {
                assert_eq!(name.join(" "), "Weekend plans");
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }
}
