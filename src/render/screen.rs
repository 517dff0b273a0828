//! Painting document lines with search highlights.

use crate::file_handler::Document;
use crate::render::sanitize::write_sanitized;
use crate::render::status::{render_status, StatusLine};
use crate::render::theme::{begin_style, end_style, ColorTheme};
use crate::search::{find_from, SearchState};
use crate::terminal::{clear_screen, hide_cursor};
use crate::viewport::ViewportState;
use std::io::{self, Write};

/// Write the lines `[from_line, to_line)` of `document`.
///
/// Case-insensitive occurrences of the active search pattern are wrapped in the
/// theme's match style. All bytes, highlighted or not, pass through the
/// sanitizer.
pub fn render_range<W: Write>(
    out: &mut W,
    document: &Document,
    from_line: usize,
    to_line: usize,
    search: &SearchState,
    theme: &ColorTheme,
) -> io::Result<()> {
    if to_line <= from_line {
        return Ok(());
    }

    let bytes = document.as_bytes();
    let start = document.line_start(from_line);
    let end = document.line_start(to_line);
    let visible = &bytes[..end];

    let mut pos = start;
    if let Some(pattern) = search.pattern().filter(|p| !p.is_empty()) {
        while let Some(at) = find_from(visible, pattern, pos) {
            write_sanitized(out, &visible[pos..at])?;

            let span_end = at + pattern.len();
            begin_style(out, &theme.search_match)?;
            write_sanitized(out, &visible[at..span_end])?;
            end_style(out)?;

            pos = span_end;
        }
    }
    write_sanitized(out, &visible[pos..])
}

/// Clear the screen and draw one full frame: document lines above, status below.
///
/// The last row belongs to the status line, so `rows - 1` document lines are shown.
pub fn paint_frame<W: Write>(
    out: &mut W,
    document: &Document,
    viewport: &ViewportState,
    search: &SearchState,
    status: &StatusLine,
    theme: &ColorTheme,
) -> io::Result<()> {
    clear_screen(out)?;
    hide_cursor(out)?;

    let top = viewport.top_line();
    let text_rows = viewport.rows().saturating_sub(1);
    render_range(out, document, top, top + text_rows, search, theme)?;

    render_status(
        out,
        clamp_u16(viewport.rows()),
        clamp_u16(viewport.cols()),
        status,
        theme,
    )
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
