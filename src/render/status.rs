//! Status line and acknowledgement messages on the last terminal row.
//!
//! Everything drawn here first clears the row, so stale text never bleeds through.

use crate::render::sanitize::sanitized_string;
use crate::render::theme::{write_styled, ColorTheme};
use crate::terminal::{clear_line, move_cursor};
use std::io::{self, Write};

/// Key shown when the last keystroke was not a command
pub const UNKNOWN_KEY: char = '?';

/// Summary of the current session for the bottom row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub name: String,
    pub top_line: usize,
    pub bottom_line: usize,
    pub last_key: char,
    pub match_count: usize,
}

impl StatusLine {
    /// `f:"<name>" p:<top>/<bottom> k:<key> m:<matches>`, fitted into `cols` cells.
    ///
    /// Returns the text before the name, the (possibly shortened) name, and the
    /// text after it, so callers can decorate the name separately.
    pub fn layout(&self, cols: usize, quoted: bool) -> (String, String, String) {
        let quote = if quoted { "\"" } else { "" };
        let head = format!("f:{quote}");
        let tail = format!(
            "{quote} p:{}/{} k:{} m:{}",
            self.top_line, self.bottom_line, self.last_key, self.match_count
        );

        let name = sanitized_string(self.name.as_bytes());
        let budget = cols.saturating_sub(head.chars().count() + tail.chars().count());
        (head, fit_name(&name, budget), tail)
    }

    /// Plain-text rendering of the status line
    pub fn format(&self, cols: usize) -> String {
        let (head, name, tail) = self.layout(cols, true);
        truncate_chars(&format!("{head}{name}{tail}"), cols)
    }
}

/// Keep the end of `name` (the most specific part of a path) within `budget` cells.
fn fit_name(name: &str, budget: usize) -> String {
    let len = name.chars().count();
    if len <= budget {
        return name.to_string();
    }
    if budget == 0 {
        return String::new();
    }
    let keep = budget - 1;
    let suffix: String = name.chars().skip(len - keep).collect();
    format!("<{suffix}")
}

fn truncate_chars(text: &str, cols: usize) -> String {
    text.chars().take(cols).collect()
}

/// One-keypress acknowledgement messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A line jump outside the accepted range
    IncorrectLine,
    /// The search pattern occurs nowhere in the document
    NotFound(Vec<u8>),
}

impl Message {
    pub fn text(&self) -> String {
        match self {
            Message::IncorrectLine => "e:incorrect line!".to_string(),
            Message::NotFound(pattern) => {
                format!("\"{}\": not found!", sanitized_string(pattern))
            }
        }
    }
}

/// Clear row `rows` and draw the status line on it.
pub fn render_status<W: Write>(
    out: &mut W,
    rows: u16,
    cols: u16,
    status: &StatusLine,
    theme: &ColorTheme,
) -> io::Result<()> {
    move_cursor(out, rows, 1)?;
    clear_line(out)?;

    match theme.file_name.as_ref() {
        Some(style) => {
            let (head, name, tail) = status.layout(cols as usize, false);
            out.write_all(head.as_bytes())?;
            write_styled(out, Some(style), &name)?;
            out.write_all(tail.as_bytes())?;
        }
        None => out.write_all(status.format(cols as usize).as_bytes())?,
    }
    out.flush()
}

/// Clear row `rows` and draw `message` on it.
pub fn render_message<W: Write>(
    out: &mut W,
    rows: u16,
    message: &Message,
    theme: &ColorTheme,
) -> io::Result<()> {
    move_cursor(out, rows, 1)?;
    clear_line(out)?;

    let style = match message {
        Message::IncorrectLine => theme.error_text.as_ref(),
        Message::NotFound(_) => theme.notice.as_ref(),
    };
    write_styled(out, style, &message.text())?;
    out.flush()
}
