//! Byte-level key bindings.
//!
//! Keys arrive as single bytes from the terminal. Each byte maps to one
//! [`KeyCommand`]; the only two-key binding (`tt`) is reported as
//! [`KeyCommand::JumpPrefix`] and completed by the caller reading one more byte.

/// Ctrl-D
pub const CTRL_D: u8 = 0x04;
/// Ctrl-U
pub const CTRL_U: u8 = 0x15;

/// Commands understood by a viewing session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Quit,
    LineDown,
    LineUp,
    GoToStart,
    GoToEnd,
    PageDown,
    PageUp,
    StartSearch,
    NextMatch,
    /// First half of `tt`
    JumpPrefix,
    Help,
    Unknown,
}

impl KeyCommand {
    pub fn from_key(key: u8) -> Self {
        match key {
            b'q' => KeyCommand::Quit,
            b'j' => KeyCommand::LineDown,
            b'k' => KeyCommand::LineUp,
            b'g' => KeyCommand::GoToStart,
            b'G' => KeyCommand::GoToEnd,
            b' ' | CTRL_D => KeyCommand::PageDown,
            CTRL_U => KeyCommand::PageUp,
            b'/' => KeyCommand::StartSearch,
            b'n' => KeyCommand::NextMatch,
            b't' => KeyCommand::JumpPrefix,
            b'h' => KeyCommand::Help,
            _ => KeyCommand::Unknown,
        }
    }

    /// Character shown as "last key" on the status line after `key` ran this command.
    pub fn status_key(self, key: u8) -> char {
        match self {
            KeyCommand::PageDown => 'D',
            KeyCommand::PageUp => 'U',
            KeyCommand::Unknown => crate::render::UNKNOWN_KEY,
            _ => char::from(key),
        }
    }
}

/// True when `key` completes a `tt` jump after [`KeyCommand::JumpPrefix`].
pub fn completes_jump(key: u8) -> bool {
    key == b't'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings() {
        assert_eq!(KeyCommand::from_key(b'q'), KeyCommand::Quit);
        assert_eq!(KeyCommand::from_key(b'j'), KeyCommand::LineDown);
        assert_eq!(KeyCommand::from_key(b'k'), KeyCommand::LineUp);
        assert_eq!(KeyCommand::from_key(b'g'), KeyCommand::GoToStart);
        assert_eq!(KeyCommand::from_key(b'G'), KeyCommand::GoToEnd);
        assert_eq!(KeyCommand::from_key(b' '), KeyCommand::PageDown);
        assert_eq!(KeyCommand::from_key(CTRL_D), KeyCommand::PageDown);
        assert_eq!(KeyCommand::from_key(CTRL_U), KeyCommand::PageUp);
        assert_eq!(KeyCommand::from_key(b'/'), KeyCommand::StartSearch);
        assert_eq!(KeyCommand::from_key(b'n'), KeyCommand::NextMatch);
        assert_eq!(KeyCommand::from_key(b't'), KeyCommand::JumpPrefix);
        assert_eq!(KeyCommand::from_key(b'h'), KeyCommand::Help);
    }

    #[test]
    fn test_unbound_keys_are_unknown() {
        for key in [b'x', b'Q', b'\n', 0x1b, 0xff] {
            assert_eq!(KeyCommand::from_key(key), KeyCommand::Unknown);
        }
    }

    #[test]
    fn test_status_key() {
        assert_eq!(KeyCommand::PageDown.status_key(b' '), 'D');
        assert_eq!(KeyCommand::PageDown.status_key(CTRL_D), 'D');
        assert_eq!(KeyCommand::PageUp.status_key(CTRL_U), 'U');
        assert_eq!(KeyCommand::Unknown.status_key(b'x'), '?');
        assert_eq!(KeyCommand::LineDown.status_key(b'j'), 'j');
        assert_eq!(KeyCommand::JumpPrefix.status_key(b't'), 't');
    }

    #[test]
    fn test_jump_completion() {
        assert!(completes_jump(b't'));
        assert!(!completes_jump(b'j'));
    }
}
