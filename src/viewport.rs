//! Viewport navigation: which document lines are visible.
//!
//! The viewport is a top line plus the terminal height. Every move keeps
//! `0 <= top_line <= bottom`, where `bottom` is the top line that shows the last
//! full screen of the document (`0` when the document fits on one screen).

use std::fmt;

/// A rejected line jump: the requested line cannot be the top of a full screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOutOfRange {
    pub requested: usize,
    pub line_count: usize,
    pub rows: usize,
}

impl fmt::Display for LineOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {} does not start a full screen ({} lines, {} rows)",
            self.requested, self.line_count, self.rows
        )
    }
}

/// Visible window over a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportState {
    /// First visible line (0-based)
    top_line: usize,
    /// Terminal height in rows
    rows: usize,
    /// Terminal width in columns
    cols: usize,
    /// Lines in the document being viewed
    line_count: usize,
}

impl ViewportState {
    /// Create a viewport at the top of a document with `line_count` lines
    pub fn new(line_count: usize, rows: usize, cols: usize) -> Self {
        Self {
            top_line: 0,
            rows,
            cols,
            line_count,
        }
    }

    pub fn top_line(&self) -> usize {
        self.top_line
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Highest legal top line
    pub fn bottom(&self) -> usize {
        self.line_count.saturating_sub(self.rows)
    }

    /// Update the terminal dimensions, re-clamping the top line if the bottom moved up
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.top_line = self.top_line.min(self.bottom());
    }

    /// Move by `delta` lines, clamped to `[0, bottom]`
    pub fn scroll_by(&mut self, delta: isize) -> usize {
        let target = if delta < 0 {
            self.top_line.saturating_sub(delta.unsigned_abs())
        } else {
            self.top_line.saturating_add(delta as usize)
        };
        self.top_line = target.min(self.bottom());
        self.top_line
    }

    pub fn line_up(&mut self) -> usize {
        self.scroll_by(-1)
    }

    /// Advance one line while the screen does not yet show the last line
    pub fn line_down(&mut self) -> usize {
        if self.top_line + self.rows < self.line_count {
            self.top_line += 1;
        }
        self.top_line
    }

    pub fn to_top(&mut self) -> usize {
        self.top_line = 0;
        self.top_line
    }

    pub fn to_bottom(&mut self) -> usize {
        self.top_line = self.bottom();
        self.top_line
    }

    /// Advance a full screen, or land exactly on the bottom when less than two
    /// screens remain
    pub fn page_down(&mut self) -> usize {
        if self.top_line + 2 * self.rows < self.line_count {
            self.top_line += self.rows;
        } else {
            self.top_line = self.bottom();
        }
        self.top_line
    }

    pub fn page_up(&mut self) -> usize {
        if self.top_line >= self.rows {
            self.top_line -= self.rows;
        } else {
            self.top_line = 0;
        }
        self.top_line
    }

    /// Make `line` the top line if a full screen fits below it.
    ///
    /// Targets inside the last screen are rejected even though paging can reach
    /// them.
    pub fn jump_to_line(&mut self, line: usize) -> Result<usize, LineOutOfRange> {
        match line.checked_add(self.rows) {
            Some(end) if end <= self.line_count => {
                self.top_line = line;
                Ok(self.top_line)
            }
            _ => Err(LineOutOfRange {
                requested: line,
                line_count: self.line_count,
                rows: self.rows,
            }),
        }
    }

    /// Place `line` in the middle of the screen, clamped to `[0, bottom]`
    pub fn center_on(&mut self, line: usize) -> usize {
        self.top_line = line.saturating_sub(self.rows / 2).min(self.bottom());
        self.top_line
    }
}
