//! Stateful search: the active pattern and the "find next" cursor.

use crate::file_handler::Document;
use crate::search::matcher;
use crate::viewport::ViewportState;
use bstr::{BString, ByteSlice};

/// Result of moving the search cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A match at `offset` after the previous cursor
    Found { offset: usize, line: usize },
    /// Reached the end, restarted from the top and found the first match again
    Wrapped { offset: usize, line: usize },
    /// No match anywhere; cursor and viewport unchanged
    NotFound,
    /// No pattern is active
    Inactive,
}

impl SearchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Found { .. } | Self::Wrapped { .. })
    }
}

/// Search pattern plus cursor over one document
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pattern: Option<BString>,
    /// Byte offset the next search starts from; always within the document
    cursor: usize,
    match_count: usize,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pattern(&self) -> Option<&[u8]> {
        self.pattern.as_ref().map(|p| p.as_bytes())
    }

    pub fn is_active(&self) -> bool {
        self.pattern.is_some()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn match_count(&self) -> usize {
        self.match_count
    }

    /// Drop the pattern and reset the cursor
    pub fn clear(&mut self) {
        self.pattern = None;
        self.cursor = 0;
        self.match_count = 0;
    }

    /// Replace the pattern and look for its first occurrence.
    ///
    /// On a miss the pattern stays active (so `n` keeps trying) and the viewport
    /// is left where it was.
    pub fn start_search(
        &mut self,
        document: &Document,
        viewport: &mut ViewportState,
        pattern: impl Into<BString>,
    ) -> SearchOutcome {
        self.pattern = Some(pattern.into());
        self.cursor = 0;
        self.match_count = 0;

        let outcome = self.advance(document, viewport);
        log::debug!("search {:?}: {:?}", self.pattern, outcome);
        outcome
    }

    /// Move to the next match after the cursor, wrapping to the top once.
    pub fn find_next(
        &mut self,
        document: &Document,
        viewport: &mut ViewportState,
    ) -> SearchOutcome {
        if self.pattern.is_none() {
            return SearchOutcome::Inactive;
        }

        match self.advance(document, viewport) {
            SearchOutcome::NotFound => {
                let (saved_cursor, saved_count) = (self.cursor, self.match_count);
                self.cursor = 0;
                self.match_count = 0;

                match self.advance(document, viewport) {
                    SearchOutcome::Found { offset, line } => {
                        SearchOutcome::Wrapped { offset, line }
                    }
                    other => {
                        self.cursor = saved_cursor;
                        self.match_count = saved_count;
                        other
                    }
                }
            }
            outcome => outcome,
        }
    }

    fn advance(&mut self, document: &Document, viewport: &mut ViewportState) -> SearchOutcome {
        let Some(pattern) = self.pattern.as_ref() else {
            return SearchOutcome::Inactive;
        };

        match matcher::find_from(document.as_bytes(), pattern, self.cursor) {
            Some(offset) => {
                let line = document.line_of(offset);
                self.cursor = offset + pattern.len();
                self.match_count += 1;
                viewport.center_on(line);
                SearchOutcome::Found { offset, line }
            }
            None => SearchOutcome::NotFound,
        }
    }
}
