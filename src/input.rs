//! Keyboard input: key bindings and the bottom-row line editor.

pub mod keymap;
pub mod prompt;

pub use keymap::{completes_jump, KeyCommand, CTRL_D, CTRL_U};
pub use prompt::{
    parse_line_number, prompt_line, prompt_line_number, LINE_NUMBER_PROMPT, PROMPT_MAX_LEN,
};
