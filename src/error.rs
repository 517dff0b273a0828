//! Error types and handling infrastructure for vmless.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types. The launcher wraps these with `anyhow` context before reporting.
//!
//! Only fatal conditions are errors. A search that finds nothing or a line jump out
//! of range are ordinary outcomes reported on the status row, not `VmError`s.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for vmless operations.
#[derive(Error, Debug)]
pub enum VmError {
    /// File system related errors (file not found, permission denied, etc.)
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found specifically (common case for user feedback)
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Path exists but cannot be paged (a directory)
    #[error("Path is a directory: {path}")]
    IsADirectory { path: PathBuf },

    /// Decompression of a compressed input failed
    #[error("Compression error: {message}")]
    CompressionError { message: String },

    /// The controlling terminal could not be opened
    #[error("error opening tty \"{path}\": {source}")]
    TtyOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or applying terminal attributes failed
    #[error("termios {operation} failed: {source}")]
    TermAttr {
        operation: &'static str,
        #[source]
        source: nix::Error,
    },

    /// Terminal input/output failed mid-session
    #[error("Terminal I/O failed: {message}")]
    TerminalIo {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic error for cases not covered by specific variants
    #[error("Operation failed: {message}")]
    Other { message: String },
}

/// Standard Result type for vmless operations.
pub type Result<T> = std::result::Result<T, VmError>;

impl VmError {
    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create a CompressionError with a descriptive message
    pub fn compression(message: impl Into<String>) -> Self {
        Self::CompressionError {
            message: message.into(),
        }
    }

    /// Create a TermAttr error for a failed `tcgetattr`/`tcsetattr`
    pub fn term_attr(operation: &'static str, source: nix::Error) -> Self {
        Self::TermAttr { operation, source }
    }

    /// Create a TerminalIo error from an io::Error with additional context
    pub fn terminal_io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::TerminalIo {
            message: message.into(),
            source,
        }
    }

    /// Create a generic Other error with a descriptive message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

// Output written to the screen goes through `io::Write`; failures there end the session.
impl From<std::io::Error> for VmError {
    fn from(err: std::io::Error) -> Self {
        Self::TerminalIo {
            message: "write to terminal failed".to_string(),
            source: err,
        }
    }
}
