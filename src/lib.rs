//! # vmless - minimal terminal text viewer
//!
//! A small `less`-like pager: the whole document is held in memory, keys are read
//! byte by byte from the controlling terminal, and every frame is redrawn from
//! scratch with plain ANSI sequences.
//!
//! ## Features
//!
//! - **Navigation**: line, page, first/last screen and jump-to-line
//! - **Search**: case-insensitive literal search with wraparound and highlighting
//! - **Safe output**: control bytes in documents are shown in caret notation
//! - **Compression Support**: transparent gzip, bzip2, xz and zstd input
//! - **Help view**: built-in key reference opened as a nested session
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`file_handler`] - Document loading, decompression and line indexing
//! - [`terminal`] - Terminal device abstraction and raw-mode guards
//! - [`viewport`] - Which lines are visible
//! - [`search`] - Literal search and the "find next" cursor
//! - [`render`] - Frames, status line and messages
//! - [`input`] - Key bindings and the prompt line editor
//! - [`app`] - Session stack and command dispatch
//! - [`config`] - Runtime options assembled by the launcher

// Core modules
pub mod config;
pub mod error;
pub mod file_handler;

// Subsystems
pub mod input;
pub mod render;
pub mod search;
pub mod terminal;
pub mod viewport;

// Core components
pub mod app;

// Re-export commonly used types for convenience
pub use error::{Result, VmError};

// Public API surface for external usage
pub use app::{Viewer, HELP_TEXT};
pub use config::ViewerConfig;
pub use file_handler::{Document, DocumentSource, FileSource, StdinSource};
pub use terminal::{ScriptedTerminal, TermDevice, Tty, WindowSize};
pub use viewport::ViewportState;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
