//! Rendering subsystem.
//!
//! Screen output is written with crossterm commands onto any `io::Write`, so a
//! frame can be captured into a buffer as easily as sent to the terminal.

pub mod sanitize;
pub mod screen;
pub mod status;
pub mod theme;

pub use sanitize::{sanitized_string, write_sanitized};
pub use screen::{paint_frame, render_range};
pub use status::{render_message, render_status, Message, StatusLine, UNKNOWN_KEY};
pub use theme::ColorTheme;
