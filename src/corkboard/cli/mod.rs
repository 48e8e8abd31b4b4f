//! # CLI Layer
//!
//! This module is **one possible client** for corkboard; it is not the board itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the log subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `setup`: clap definitions
//! - `commands`: `run()`, context setup and per-command handlers
//! - `print`: output formatting

mod commands;
mod print;
mod setup;

pub use commands::run;
