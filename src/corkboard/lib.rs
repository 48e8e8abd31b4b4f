//! # Corkboard Architecture
//!
//! Corkboard is a **UI-agnostic sticky-notes library**. A board holds pages; each
//! page holds freely positioned, colored, rotatable text notes. The `corkboard`
//! binary is one client of the library, not the library itself.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Resolves user references (positions, id prefixes)        │
//! │  - Validates input, returns structured CmdResult values     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Board (board.rs)                                           │
//! │  - The state store: owns the current Snapshot               │
//! │  - Total mutations, copy-on-write snapshots                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SnapshotStore trait                                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: The Board Never Fails
//!
//! Every board mutation is a total function. Pointing at a page or note that
//! does not exist does nothing. Storage trouble is logged and the in-memory
//! snapshot carries on. Errors only exist at the edges: loading config, and
//! commands rejecting input a user typed.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `commands` inward, code never writes to stdout/stderr and never exits
//! the process, so the same core could serve a desktop canvas or a web view.
//!
//! ## Module Overview
//!
//! - [`board`]: The state store and its mutation contract
//! - [`model`]: Core data types (`Note`, `Page`, `Snapshot`, `NotePatch`)
//! - [`store`]: Persistence adapter trait and implementations
//! - [`commands`]: Client-facing operations over a board
//! - [`index`]: Positional and id-prefix references to pages and notes
//! - [`canvas`]: Zoom and screen-to-page conversion for canvas clients
//! - [`markup`]: Inline bold/italic/underline markers in note text
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod board;
pub mod canvas;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod markup;
pub mod model;
pub mod store;
