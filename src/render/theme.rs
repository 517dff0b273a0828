//! Styling definitions using ratatui styles, written out as crossterm commands.
//!
//! Two variants exist and the build picks one: the plain theme (default) only
//! decorates search matches; the `color` feature adds a colored file name, red
//! errors and blue-background notices.

use ratatui::crossterm::{
    queue,
    style::{
        Attribute, Color as CColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
};
use ratatui::style::{Color, Modifier, Style};
use std::io::{self, Write};

/// Styles for each decorated element; `None` means written undecorated
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTheme {
    /// Search match highlighting
    pub search_match: Style,

    /// File name on the status line
    pub file_name: Option<Style>,

    /// Error text ("incorrect line")
    pub error_text: Option<Style>,

    /// Notices ("not found")
    pub notice: Option<Style>,
}

impl Default for ColorTheme {
    /// The variant selected at build time
    fn default() -> Self {
        if cfg!(feature = "color") {
            Self::decorated()
        } else {
            Self::plain()
        }
    }
}

impl ColorTheme {
    /// Plain text everywhere except search matches
    pub fn plain() -> Self {
        Self {
            search_match: Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD),
            file_name: None,
            error_text: None,
            notice: None,
        }
    }

    /// Colored status line and messages
    pub fn decorated() -> Self {
        Self {
            search_match: Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD),
            file_name: Some(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
            error_text: Some(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            notice: Some(Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD)),
        }
    }
}

const MODIFIER_ATTRIBUTES: [(Modifier, Attribute); 9] = [
    (Modifier::BOLD, Attribute::Bold),
    (Modifier::DIM, Attribute::Dim),
    (Modifier::ITALIC, Attribute::Italic),
    (Modifier::UNDERLINED, Attribute::Underlined),
    (Modifier::SLOW_BLINK, Attribute::SlowBlink),
    (Modifier::RAPID_BLINK, Attribute::RapidBlink),
    (Modifier::REVERSED, Attribute::Reverse),
    (Modifier::HIDDEN, Attribute::Hidden),
    (Modifier::CROSSED_OUT, Attribute::CrossedOut),
];

/// Switch the terminal to `style`.
pub fn begin_style<W: Write>(out: &mut W, style: &Style) -> io::Result<()> {
    for (modifier, attribute) in MODIFIER_ATTRIBUTES {
        if style.add_modifier.contains(modifier) {
            queue!(out, SetAttribute(attribute))?;
        }
    }
    if let Some(fg) = style.fg {
        queue!(out, SetForegroundColor(crossterm_color(fg)))?;
    }
    if let Some(bg) = style.bg {
        queue!(out, SetBackgroundColor(crossterm_color(bg)))?;
    }
    Ok(())
}

/// Return to default attributes and colors.
pub fn end_style<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset))
}

/// Write `text` inside `style`, or undecorated when there is no style.
pub fn write_styled<W: Write>(out: &mut W, style: Option<&Style>, text: &str) -> io::Result<()> {
    match style {
        Some(style) => {
            begin_style(out, style)?;
            out.write_all(text.as_bytes())?;
            end_style(out)
        }
        None => out.write_all(text.as_bytes()),
    }
}

/// Map a ratatui color onto crossterm's palette (ANSI normal colors are crossterm's `Dark*`).
pub fn crossterm_color(color: Color) -> CColor {
    match color {
        Color::Reset => CColor::Reset,
        Color::Black => CColor::Black,
        Color::Red => CColor::DarkRed,
        Color::Green => CColor::DarkGreen,
        Color::Yellow => CColor::DarkYellow,
        Color::Blue => CColor::DarkBlue,
        Color::Magenta => CColor::DarkMagenta,
        Color::Cyan => CColor::DarkCyan,
        Color::Gray => CColor::Grey,
        Color::DarkGray => CColor::DarkGrey,
        Color::LightRed => CColor::Red,
        Color::LightGreen => CColor::Green,
        Color::LightYellow => CColor::Yellow,
        Color::LightBlue => CColor::Blue,
        Color::LightMagenta => CColor::Magenta,
        Color::LightCyan => CColor::Cyan,
        Color::White => CColor::White,
        Color::Rgb(r, g, b) => CColor::Rgb { r, g, b },
        Color::Indexed(i) => CColor::AnsiValue(i),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_only_highlights_matches() {
        let theme = ColorTheme::plain();
        assert_eq!(theme.search_match.bg, Some(Color::Blue));
        assert!(theme.search_match.add_modifier.contains(Modifier::BOLD));
        assert_eq!(theme.file_name, None);
        assert_eq!(theme.error_text, None);
        assert_eq!(theme.notice, None);
    }

    #[test]
    fn test_decorated_theme() {
        let theme = ColorTheme::decorated();
        assert_eq!(theme.file_name.unwrap().fg, Some(Color::Blue));
        assert_eq!(theme.error_text.unwrap().fg, Some(Color::Red));
        assert_eq!(theme.notice.unwrap().bg, Some(Color::Blue));
    }

    #[test]
    fn test_default_follows_build_feature() {
        let expected = if cfg!(feature = "color") {
            ColorTheme::decorated()
        } else {
            ColorTheme::plain()
        };
        assert_eq!(ColorTheme::default(), expected);
    }

    #[test]
    fn test_write_styled_wraps_text() {
        let mut out = Vec::new();
        let style = Style::default().add_modifier(Modifier::BOLD);
        write_styled(&mut out, Some(&style), "hi").unwrap();
        assert_eq!(out, b"\x1b[1mhi\x1b[0m");

        out.clear();
        write_styled(&mut out, None, "plain").unwrap();
        assert_eq!(out, b"plain");
    }

    #[test]
    fn test_color_mapping() {
        assert_eq!(crossterm_color(Color::Blue), CColor::DarkBlue);
        assert_eq!(crossterm_color(Color::LightBlue), CColor::Blue);
        assert_eq!(
            crossterm_color(Color::Rgb(1, 2, 3)),
            CColor::Rgb { r: 1, g: 2, b: 3 }
        );
        assert_eq!(crossterm_color(Color::Indexed(42)), CColor::AnsiValue(42));
    }
}
