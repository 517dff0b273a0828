//! Minimal line editor on the bottom row.
//!
//! Used for search patterns and line numbers. The editor puts the device into the
//! viewer's input mode for its own duration and restores whatever mode was active
//! before, so it works both inside a session and on its own.

use crate::error::Result;
use crate::render::sanitize::{caret, is_unsafe};
use crate::terminal::{clear_line, enter_raw_mode, move_cursor, show_cursor, TermDevice};
use ratatui::crossterm::{cursor::MoveLeft, queue};
use std::io::Write;
use std::num::IntErrorKind;

/// Longest input the editor accepts, in bytes
pub const PROMPT_MAX_LEN: usize = 254;

/// Prompt shown for line-number entry
pub const LINE_NUMBER_PROMPT: &str = "to line:";

const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7f;

/// Read one line of input after showing `prompt` on row `rows`.
///
/// Enter only finishes the line once something has been typed. Returns `None`
/// when input ends before anything was typed.
pub fn prompt_line<D: TermDevice, W: Write>(
    device: &D,
    out: &mut W,
    rows: u16,
    prompt: &str,
    max_len: usize,
) -> Result<Option<Vec<u8>>> {
    let guard = enter_raw_mode(device)?;
    let edited = edit_line(device, out, rows, prompt, max_len);
    let restored = guard.restore();

    let line = edited?;
    restored?;
    Ok(line)
}

/// Prompt for a line number; anything that is not a whole base-10 integer reads as `0`.
pub fn prompt_line_number<D: TermDevice, W: Write>(
    device: &D,
    out: &mut W,
    rows: u16,
    max_len: usize,
) -> Result<i64> {
    let line = prompt_line(device, out, rows, LINE_NUMBER_PROMPT, max_len)?;
    Ok(line.map_or(0, |text| parse_line_number(&text)))
}

/// Parse `text` as a base-10 integer.
///
/// Leading whitespace and a sign are accepted; any other stray character makes
/// the whole input read as `0`. Out-of-range values saturate.
pub fn parse_line_number(text: &[u8]) -> i64 {
    let Ok(text) = std::str::from_utf8(text) else {
        return 0;
    };

    match text.trim_start().parse::<i64>() {
        Ok(n) => n,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 0,
        },
    }
}

fn edit_line<D: TermDevice, W: Write>(
    device: &D,
    out: &mut W,
    rows: u16,
    prompt: &str,
    max_len: usize,
) -> Result<Option<Vec<u8>>> {
    move_cursor(out, rows, 1)?;
    clear_line(out)?;
    show_cursor(out)?;
    out.write_all(prompt.as_bytes())?;
    out.flush()?;

    let mut buffer: Vec<u8> = Vec::new();
    while buffer.len() < max_len {
        let Some(byte) = device.read_byte()? else {
            break;
        };

        match byte {
            b'\n' | b'\r' => {
                if !buffer.is_empty() {
                    break;
                }
            }
            BACKSPACE | DELETE => {
                if let Some(width) = pop_char(&mut buffer) {
                    queue!(out, MoveLeft(width))?;
                    out.write_all(&b"  "[..width as usize])?;
                    queue!(out, MoveLeft(width))?;
                }
            }
            _ => {
                buffer.push(byte);
                echo(out, byte)?;
            }
        }
        out.flush()?;
    }

    Ok(if buffer.is_empty() { None } else { Some(buffer) })
}

fn echo<W: Write>(out: &mut W, byte: u8) -> std::io::Result<()> {
    if is_unsafe(byte) {
        out.write_all(&caret(byte))
    } else {
        out.write_all(&[byte])
    }
}

/// Remove the last character and return its screen width.
///
/// A UTF-8 sequence goes as a whole when up to three continuation bytes follow a
/// lead byte; anything else is removed one byte at a time.
fn pop_char(buffer: &mut Vec<u8>) -> Option<u16> {
    let &last = buffer.last()?;
    let trailing = buffer
        .iter()
        .rev()
        .take(3)
        .take_while(|&&byte| (0x80..0xc0).contains(&byte))
        .count();

    let start = match buffer.len().checked_sub(trailing + 1) {
        Some(lead) if trailing > 0 && buffer[lead] >= 0xc0 => lead,
        _ => buffer.len() - 1,
    };
    buffer.truncate(start);

    Some(if trailing == 0 && is_unsafe(last) { 2 } else { 1 })
}
