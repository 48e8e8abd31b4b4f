use super::print::{print_config, print_messages, print_notes, print_pages};
use super::setup::{Cli, Commands, NoteCommands, PageCommands};
use clap::Parser;
use corkboard::board::Board;
use corkboard::canvas::Viewport;
use corkboard::commands::config::ConfigAction;
use corkboard::commands::notes::NoteDraft;
use corkboard::commands::{self, CmdResult};
use corkboard::config::BoardConfig;
use corkboard::error::{BoardError, Result};
use corkboard::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "CORKBOARD_LOG";

struct AppContext {
    board: Board<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir)?;
    debug!(data_dir = %data_dir.display(), "using data directory");

    // Config never opens the board
    let command = match cli.command {
        Some(Commands::Config { key, value }) => return handle_config(&data_dir, key, value),
        other => other,
    };

    let mut ctx = init_context(&data_dir);

    match command {
        Some(Commands::Pages) => handle_pages(&ctx),
        Some(Commands::Page(cmd)) => handle_page(&mut ctx, cmd),
        Some(Commands::Notes) | None => handle_notes(&ctx),
        Some(Commands::Note(cmd)) => handle_note(&mut ctx, cmd),
        Some(Commands::Sidebar) => {
            let result = commands::pages::toggle_sidebar(&mut ctx.board);
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "corkboard=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    ProjectDirs::from("com", "corkboard", "corkboard")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            BoardError::Config("could not determine a data directory; pass --data-dir".into())
        })
}

fn init_context(data_dir: &Path) -> AppContext {
    let config = BoardConfig::load(data_dir).unwrap_or_else(|err| {
        warn!(error = %err, "ignoring unreadable config, using defaults");
        BoardConfig::default()
    });

    let store = FileStore::new(data_dir).with_name(&config.storage_name);
    let board = Board::open(store, &config);
    AppContext { board }
}

fn handle_pages(ctx: &AppContext) -> Result<()> {
    let result = commands::pages::list(&ctx.board);
    print_pages(&result.listed_pages);
    print_messages(&result.messages);
    Ok(())
}

fn handle_page(ctx: &mut AppContext, cmd: PageCommands) -> Result<()> {
    let board = &mut ctx.board;
    let result = match cmd {
        PageCommands::Add { name } => commands::pages::add(board, &name.join(" "))?,
        PageCommands::Use { page } => commands::pages::switch(board, &page)?,
        PageCommands::Rename { page, name } => {
            commands::pages::rename(board, &page, &name.join(" "))?
        }
        PageCommands::Delete { page } => commands::pages::delete(board, &page)?,
        PageCommands::Move { page, position } => {
            commands::pages::move_to(board, &page, position)?
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_notes(ctx: &AppContext) -> Result<()> {
    let result = commands::notes::list(&ctx.board)?;
    print_listed_notes(&result);
    print_messages(&result.messages);
    Ok(())
}

fn print_listed_notes(result: &CmdResult) {
    if let Some(name) = &result.page_name {
        print_notes(name, &result.listed_notes);
    }
}

fn handle_note(ctx: &mut AppContext, cmd: NoteCommands) -> Result<()> {
    let board = &mut ctx.board;
    let result = match cmd {
        NoteCommands::Add {
            content,
            x,
            y,
            color,
        } => {
            let draft = NoteDraft {
                content: content.join(" "),
                x,
                y,
                color,
            };
            commands::notes::add(board, draft)?
        }
        NoteCommands::Edit { note, content } => {
            commands::notes::edit(board, &note, &content.join(" "))?
        }
        NoteCommands::Move {
            note,
            dx,
            dy,
            scale,
            zoom,
        } => {
            let mut viewport = Viewport::new(scale);
            viewport.zoom_steps(zoom);
            commands::notes::move_by(board, &note, dx, dy, &viewport)?
        }
        NoteCommands::Rotate { note, degrees, by } => {
            commands::notes::rotate(board, &note, degrees, by)?
        }
        NoteCommands::Color { note, color } => commands::notes::recolor(board, &note, color)?,
        NoteCommands::Format {
            note,
            format,
            start,
            end,
        } => commands::notes::format(board, &note, format, start, end)?,
        NoteCommands::Delete { note } => commands::notes::delete(board, &note)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(data_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = commands::config::run(data_dir, action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
