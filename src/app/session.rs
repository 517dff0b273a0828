//! Viewing sessions and the bounded stack that nests them.
//!
//! A session owns everything that belongs to one view of one document: its
//! viewport, its search state, the last key shown on the status line, and the
//! raw-mode guard acquired when it opened. Sessions nest at most
//! [`MAX_SESSION_DEPTH`] deep (the document plus one help view).

use crate::error::{Result, VmError};
use crate::file_handler::Document;
use crate::render::{StatusLine, UNKNOWN_KEY};
use crate::search::SearchState;
use crate::terminal::{reset_screen, RawModeGuard, TermDevice, WindowSize};
use crate::viewport::ViewportState;
use std::io::Write;

/// Deepest allowed nesting: root plus one help session
pub const MAX_SESSION_DEPTH: usize = 2;

/// What a session is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Document,
    Help,
}

/// One active view
pub struct Session<'a, 'd, D: TermDevice> {
    kind: SessionKind,
    document: &'a Document,
    name: String,
    pub(crate) viewport: ViewportState,
    pub(crate) search: SearchState,
    pub(crate) last_key: char,
    guard: RawModeGuard<'d, D>,
}

impl<'a, 'd, D: TermDevice> Session<'a, 'd, D> {
    pub fn new(
        kind: SessionKind,
        document: &'a Document,
        name: String,
        size: WindowSize,
        guard: RawModeGuard<'d, D>,
    ) -> Self {
        Self {
            kind,
            document,
            name,
            viewport: ViewportState::new(
                document.line_count(),
                usize::from(size.rows),
                usize::from(size.cols),
            ),
            search: SearchState::new(),
            last_key: UNKNOWN_KEY,
            guard,
        }
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn document(&self) -> &'a Document {
        self.document
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn last_key(&self) -> char {
        self.last_key
    }

    /// 1-based row holding the status line
    pub fn status_row(&self) -> u16 {
        u16::try_from(self.viewport.rows()).unwrap_or(u16::MAX)
    }

    pub fn status_line(&self) -> StatusLine {
        StatusLine {
            name: self.name.clone(),
            top_line: self.viewport.top_line(),
            bottom_line: self.viewport.bottom(),
            last_key: self.last_key,
            match_count: self.search.match_count(),
        }
    }

    /// Leave the session: restore the terminal mode it replaced, drop the search and
    /// clear the screen.
    pub fn close<W: Write>(self, out: &mut W) -> Result<()> {
        let Session {
            kind,
            guard,
            mut search,
            ..
        } = self;

        guard.restore()?;
        search.clear();
        log::debug!("closed {:?} session", kind);

        reset_screen(out)?;
        Ok(())
    }
}

/// Open sessions, innermost last.
///
/// Dropping the stack drops the remaining sessions innermost first, so their
/// raw-mode guards restore the terminal in reverse order of acquisition.
pub struct SessionStack<'a, 'd, D: TermDevice> {
    sessions: Vec<Session<'a, 'd, D>>,
}

impl<'a, 'd, D: TermDevice> SessionStack<'a, 'd, D> {
    pub fn new() -> Self {
        Self {
            sessions: Vec::with_capacity(MAX_SESSION_DEPTH),
        }
    }

    pub fn depth(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_full(&self) -> bool {
        self.sessions.len() >= MAX_SESSION_DEPTH
    }

    pub fn push(&mut self, session: Session<'a, 'd, D>) -> Result<()> {
        if self.is_full() {
            return Err(VmError::other(format!(
                "cannot nest more than {} sessions",
                MAX_SESSION_DEPTH
            )));
        }
        log::debug!(
            "opening {:?} session {:?} at depth {}",
            session.kind,
            session.name,
            self.sessions.len() + 1
        );
        self.sessions.push(session);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Session<'a, 'd, D>> {
        self.sessions.pop()
    }

    pub fn top_mut(&mut self) -> Option<&mut Session<'a, 'd, D>> {
        self.sessions.last_mut()
    }
}

impl<'a, 'd, D: TermDevice> Default for SessionStack<'a, 'd, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, 'd, D: TermDevice> Drop for SessionStack<'a, 'd, D> {
    fn drop(&mut self) {
        while let Some(session) = self.sessions.pop() {
            log::debug!("abandoning {:?} session {:?}", session.kind, session.name);
        }
    }
}
