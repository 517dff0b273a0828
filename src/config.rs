//! Runtime options for a viewer, assembled by the launcher.
//!
//! There are no configuration files; everything comes from the command line and
//! the build (the theme variant follows the `color` feature).

use crate::input::PROMPT_MAX_LEN;
use crate::render::ColorTheme;
use crate::terminal::DEV_TTY;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Name shown on the status line for the root document
    pub display_name: String,

    /// Terminal the viewer reads keys from
    pub tty_path: PathBuf,

    pub theme: ColorTheme,

    /// Longest line the prompt accepts, in bytes
    pub prompt_max_len: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            tty_path: PathBuf::from(DEV_TTY),
            theme: ColorTheme::default(),
            prompt_max_len: PROMPT_MAX_LEN,
        }
    }
}

impl ViewerConfig {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Self::default()
        }
    }

    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_tty_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tty_path = path.into();
        self
    }

    pub fn with_prompt_max_len(mut self, max_len: usize) -> Self {
        self.prompt_max_len = max_len;
        self
    }
}
