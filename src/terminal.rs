//! Terminal mode management and low-level screen control.
//!
//! A [`TermDevice`] is anything with terminal attributes, a blocking one-byte read
//! and a window size. [`enter_raw_mode`] saves the device's current attributes,
//! applies the viewer's input mode and returns a [`RawModeGuard`] that owns the
//! saved attributes until they are restored. Nothing about the terminal mode is
//! kept in process-wide state: whoever holds the guard is responsible for the
//! restore, and nested guards restore in reverse order of acquisition.
//!
//! The input mode clears `ECHO`, `ICANON` and `IEXTEN` and makes reads return
//! after exactly one byte with no inter-byte timeout. Signal generation and
//! output post-processing are left untouched, so `\n` still moves to column 1.

pub mod scripted;
pub mod tty;

use crate::error::Result;
use ratatui::crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, SetAttribute},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

pub use scripted::{ScriptedMode, ScriptedTerminal};
pub use tty::{Tty, DEV_TTY};

/// Terminal dimensions in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub rows: u16,
    pub cols: u16,
}

impl WindowSize {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }
}

/// Core trait for the device the viewer reads keys from.
///
/// All methods take `&self`: nested sessions hold guards borrowing the same
/// device while the active session keeps reading from it.
pub trait TermDevice {
    /// Saved terminal attributes
    type Attrs: Clone;

    /// Read the current attributes
    fn get_attrs(&self) -> Result<Self::Attrs>;

    /// Apply `attrs` immediately
    fn set_attrs(&self, attrs: &Self::Attrs) -> Result<()>;

    /// Derive the viewer's input mode from `base`
    fn raw_attrs(&self, base: &Self::Attrs) -> Self::Attrs;

    /// Block until one byte is available; `None` at end of input
    fn read_byte(&self) -> Result<Option<u8>>;

    /// Current window dimensions
    fn window_size(&self) -> Result<WindowSize>;
}

/// Saved attributes of a device, restored on [`RawModeGuard::restore`] or drop.
#[must_use = "dropping the guard immediately restores the previous terminal mode"]
pub struct RawModeGuard<'d, D: TermDevice> {
    device: &'d D,
    saved: Option<D::Attrs>,
}

/// Save the current attributes of `device` and switch it to the viewer's input mode.
///
/// Failures are fatal to the caller's session and are never retried.
pub fn enter_raw_mode<D: TermDevice>(device: &D) -> Result<RawModeGuard<'_, D>> {
    let previous = device.get_attrs()?;
    let raw = device.raw_attrs(&previous);
    device.set_attrs(&raw)?;

    Ok(RawModeGuard {
        device,
        saved: Some(previous),
    })
}

impl<'d, D: TermDevice> RawModeGuard<'d, D> {
    /// Reapply the attributes saved when the guard was created.
    pub fn restore(mut self) -> Result<()> {
        match self.saved.take() {
            Some(saved) => self.device.set_attrs(&saved),
            None => Ok(()),
        }
    }

    /// The attributes that will be restored
    pub fn saved(&self) -> Option<&D::Attrs> {
        self.saved.as_ref()
    }
}

impl<'d, D: TermDevice> Drop for RawModeGuard<'d, D> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            if let Err(err) = self.device.set_attrs(&saved) {
                log::warn!("failed to restore terminal attributes: {}", err);
            }
        }
    }
}

/// Move the cursor to 1-based `row`/`col`. Does nothing when `col < 1`.
pub fn move_cursor<W: Write>(out: &mut W, row: u16, col: u16) -> io::Result<()> {
    if col < 1 {
        return Ok(());
    }
    queue!(out, MoveTo(col - 1, row.saturating_sub(1)))
}

/// Reset attributes, home the cursor and clear the whole screen.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        MoveTo(0, 0),
        Clear(ClearType::All)
    )
}

/// Clear the line the cursor is on.
pub fn clear_line<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::CurrentLine))
}

pub fn hide_cursor<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Hide)
}

pub fn show_cursor<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Show)
}

/// Leave the screen blank with the cursor visible.
pub fn reset_screen<W: Write>(out: &mut W) -> io::Result<()> {
    clear_screen(out)?;
    show_cursor(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_cursor_sequence() {
        let mut out = Vec::new();
        move_cursor(&mut out, 24, 1).unwrap();
        assert_eq!(out, b"\x1b[24;1H");

        out.clear();
        move_cursor(&mut out, 5, 17).unwrap();
        assert_eq!(out, b"\x1b[5;17H");
    }

    #[test]
    fn test_move_cursor_ignores_column_zero() {
        let mut out = Vec::new();
        move_cursor(&mut out, 3, 0).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_clear_screen_resets_homes_and_clears() {
        let mut out = Vec::new();
        clear_screen(&mut out).unwrap();
        assert_eq!(out, b"\x1b[0m\x1b[1;1H\x1b[2J");
    }

    #[test]
    fn test_reset_screen_shows_cursor() {
        let mut out = Vec::new();
        reset_screen(&mut out).unwrap();
        assert_eq!(out, b"\x1b[0m\x1b[1;1H\x1b[2J\x1b[?25h");
    }

    #[test]
    fn test_guard_restores_on_explicit_restore() {
        let term = ScriptedTerminal::new(b"", WindowSize::new(24, 80));
        let guard = enter_raw_mode(&term).unwrap();
        assert_ne!(term.current_mode(), ScriptedMode::COOKED);
        assert_eq!(guard.saved(), Some(&ScriptedMode::COOKED));

        guard.restore().unwrap();
        assert_eq!(term.current_mode(), ScriptedMode::COOKED);
    }

    #[test]
    fn test_guard_restores_on_drop() {
        let term = ScriptedTerminal::new(b"", WindowSize::new(24, 80));
        {
            let _guard = enter_raw_mode(&term).unwrap();
            assert!(term.current_mode().is_raw());
        }
        assert_eq!(term.current_mode(), ScriptedMode::COOKED);
    }

    #[test]
    fn test_nested_guards_restore_in_order() {
        let term = ScriptedTerminal::new(b"", WindowSize::new(24, 80));
        let outer = enter_raw_mode(&term).unwrap();
        let outer_mode = term.current_mode();

        let inner = enter_raw_mode(&term).unwrap();
        assert_eq!(inner.saved(), Some(&outer_mode));
        inner.restore().unwrap();
        assert_eq!(term.current_mode(), outer_mode);

        outer.restore().unwrap();
        assert_eq!(term.current_mode(), ScriptedMode::COOKED);
    }

    #[test]
    fn test_attribute_failure_is_reported() {
        let term = ScriptedTerminal::new(b"", WindowSize::new(24, 80));
        term.fail_attrs(true);
        assert!(enter_raw_mode(&term).is_err());
        assert_eq!(term.current_mode(), ScriptedMode::COOKED);
    }
}
