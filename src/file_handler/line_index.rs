//! SIMD-accelerated line metrics for an in-memory document
//!
//! Lines are delimited by `\n`. The line count of a document is the number of
//! newline bytes it contains, so a final line without a trailing newline does not
//! add to the count. Scroll bounds are computed from this count.
//!
//! All scanning goes through memchr, which uses SIMD newline detection where the
//! platform supports it.

use memchr::{memchr, memchr_iter};

/// Count the newline bytes in `data`.
pub fn count_lines(data: &[u8]) -> usize {
    memchr_iter(b'\n', data).count()
}

/// Line number (0-based) containing the byte at `offset`.
///
/// Equals the number of newline bytes strictly before `offset`. Offsets past the
/// end are clamped to the data length.
pub fn line_of_offset(data: &[u8], offset: usize) -> usize {
    count_lines(&data[..offset.min(data.len())])
}

/// Byte offsets where each line starts
///
/// - offsets[0] = 0 (first line always starts at byte 0)
/// - offsets[n] = byte position after the nth newline
///
/// Built eagerly, since the whole document is resident in memory.
#[derive(Debug, Clone, Default)]
pub struct LineIndex {
    line_offsets: Vec<usize>,
}

impl LineIndex {
    /// Index every line start in `data`
    pub fn build(data: &[u8]) -> Self {
        let mut line_offsets = Vec::with_capacity(data.len() / 64 + 1);
        line_offsets.push(0);

        let mut pos = 0;
        while let Some(newline_offset) = memchr(b'\n', &data[pos..]) {
            pos += newline_offset + 1; // Move past the newline
            line_offsets.push(pos);
        }

        Self { line_offsets }
    }

    /// Number of newline-terminated lines
    pub fn line_count(&self) -> usize {
        self.line_offsets.len() - 1
    }

    /// Byte offset where `line` starts, if the line exists
    ///
    /// The line after the last newline is addressable even when empty.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_offsets.get(line).copied()
    }

    /// Line number containing `offset`
    pub fn line_of(&self, offset: usize) -> usize {
        // partition_point returns how many line starts are <= offset
        self.line_offsets
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }
}
