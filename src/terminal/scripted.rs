//! In-memory terminal device driven by a scripted key sequence.
//!
//! Used to run complete viewer sessions without a controlling terminal: keys come
//! from a byte script, attribute changes are recorded, and the window size is
//! fixed. Reading past the end of the script reports end of input.

use crate::error::{Result, VmError};
use crate::terminal::{TermDevice, WindowSize};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Attribute snapshot of a [`ScriptedTerminal`]: how many raw-mode layers are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedMode(pub u32);

impl ScriptedMode {
    /// The mode the device starts in
    pub const COOKED: ScriptedMode = ScriptedMode(0);

    pub fn is_raw(self) -> bool {
        self.0 > 0
    }
}

/// Scripted [`TermDevice`]
#[derive(Debug)]
pub struct ScriptedTerminal {
    input: RefCell<VecDeque<u8>>,
    size: Cell<WindowSize>,
    mode: Cell<ScriptedMode>,
    mode_changes: RefCell<Vec<ScriptedMode>>,
    fail_attrs: Cell<bool>,
    get_budget: Cell<Option<usize>>,
}

impl ScriptedTerminal {
    pub fn new(keys: &[u8], size: WindowSize) -> Self {
        Self {
            input: RefCell::new(keys.iter().copied().collect()),
            size: Cell::new(size),
            mode: Cell::new(ScriptedMode::COOKED),
            mode_changes: RefCell::new(Vec::new()),
            fail_attrs: Cell::new(false),
            get_budget: Cell::new(None),
        }
    }

    /// Append more keys to the script
    pub fn push_keys(&self, keys: &[u8]) {
        self.input.borrow_mut().extend(keys.iter().copied());
    }

    /// Change the reported window size
    pub fn resize(&self, size: WindowSize) {
        self.size.set(size);
    }

    /// Make every attribute get/set fail from now on
    pub fn fail_attrs(&self, fail: bool) {
        self.fail_attrs.set(fail);
    }

    /// Let `calls` more `get_attrs` calls succeed, then fail the rest
    pub fn fail_get_attrs_after(&self, calls: usize) {
        self.get_budget.set(Some(calls));
    }

    pub fn current_mode(&self) -> ScriptedMode {
        self.mode.get()
    }

    /// Every mode applied through `set_attrs`, in order
    pub fn mode_changes(&self) -> Vec<ScriptedMode> {
        self.mode_changes.borrow().clone()
    }

    /// Keys not yet consumed
    pub fn remaining_keys(&self) -> usize {
        self.input.borrow().len()
    }

    fn check_attrs(&self, operation: &'static str) -> Result<()> {
        if self.fail_attrs.get() {
            Err(VmError::term_attr(operation, nix::Error::ENOTTY))
        } else {
            Ok(())
        }
    }
}

impl TermDevice for ScriptedTerminal {
    type Attrs = ScriptedMode;

    fn get_attrs(&self) -> Result<ScriptedMode> {
        self.check_attrs("getattr")?;
        match self.get_budget.get() {
            Some(0) => return Err(VmError::term_attr("getattr", nix::Error::EIO)),
            Some(left) => self.get_budget.set(Some(left - 1)),
            None => {}
        }
        Ok(self.mode.get())
    }

    fn set_attrs(&self, attrs: &ScriptedMode) -> Result<()> {
        self.check_attrs("setattr")?;
        self.mode.set(*attrs);
        self.mode_changes.borrow_mut().push(*attrs);
        Ok(())
    }

    fn raw_attrs(&self, base: &ScriptedMode) -> ScriptedMode {
        ScriptedMode(base.0 + 1)
    }

    fn read_byte(&self) -> Result<Option<u8>> {
        Ok(self.input.borrow_mut().pop_front())
    }

    fn window_size(&self) -> Result<WindowSize> {
        Ok(self.size.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_script_then_end_of_input() {
        let term = ScriptedTerminal::new(b"jq", WindowSize::new(10, 40));
        assert_eq!(term.read_byte().unwrap(), Some(b'j'));
        assert_eq!(term.read_byte().unwrap(), Some(b'q'));
        assert_eq!(term.read_byte().unwrap(), None);

        term.push_keys(b"k");
        assert_eq!(term.remaining_keys(), 1);
        assert_eq!(term.read_byte().unwrap(), Some(b'k'));
    }

    #[test]
    fn test_records_mode_changes() {
        let term = ScriptedTerminal::new(b"", WindowSize::new(10, 40));
        let raw = term.raw_attrs(&term.get_attrs().unwrap());
        term.set_attrs(&raw).unwrap();
        term.set_attrs(&ScriptedMode::COOKED).unwrap();

        assert_eq!(
            term.mode_changes(),
            vec![ScriptedMode(1), ScriptedMode::COOKED]
        );
    }

    #[test]
    fn test_get_attrs_fails_once_budget_is_spent() {
        let term = ScriptedTerminal::new(b"", WindowSize::new(10, 40));
        term.fail_get_attrs_after(1);

        assert!(term.get_attrs().is_ok());
        assert!(term.get_attrs().is_err());
        assert!(term.set_attrs(&ScriptedMode::COOKED).is_ok());
    }
}
