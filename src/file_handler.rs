//! Document loading and line metrics.
//!
//! This module provides the in-memory [`Document`] the viewer pages through, the
//! line index used for scroll bounds, and the sources a document is loaded from
//! (files, standard input, transparently decompressed streams).

pub mod compression;
pub mod document;
pub mod line_index;
pub mod source;
pub mod validation;

pub use compression::CompressionType;
pub use document::Document;
pub use line_index::{count_lines, line_of_offset, LineIndex};
pub use source::{DocumentSource, FileSource, StdinSource, STDIN_NAME};
