//! The controlling terminal, `/dev/tty`.
//!
//! Keys are read from `/dev/tty` rather than standard input so a document can be
//! piped in while the user still types commands.

use crate::error::{Result, VmError};
use crate::terminal::{TermDevice, WindowSize};
use nix::sys::termios::{self, LocalFlags, SetArg, SpecialCharacterIndices, Termios};
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

/// Path of the controlling terminal
pub const DEV_TTY: &str = "/dev/tty";

/// Terminal device backed by an open tty file
#[derive(Debug)]
pub struct Tty {
    file: File,
    path: PathBuf,
}

impl Tty {
    /// Open the controlling terminal
    pub fn open_controlling() -> Result<Self> {
        Self::open(DEV_TTY)
    }

    /// Open a terminal device at `path` for reading
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .open(&path)
            .map_err(|source| VmError::TtyOpen {
                path: path.clone(),
                source,
            })?;

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TermDevice for Tty {
    type Attrs = Termios;

    fn get_attrs(&self) -> Result<Termios> {
        termios::tcgetattr(&self.file).map_err(|e| VmError::term_attr("getattr", e))
    }

    fn set_attrs(&self, attrs: &Termios) -> Result<()> {
        termios::tcsetattr(&self.file, SetArg::TCSANOW, attrs)
            .map_err(|e| VmError::term_attr("setattr", e))
    }

    fn raw_attrs(&self, base: &Termios) -> Termios {
        let mut raw = base.clone();
        raw.local_flags
            .remove(LocalFlags::ECHO | LocalFlags::ICANON | LocalFlags::IEXTEN);
        raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 1;
        raw.control_chars[SpecialCharacterIndices::VTIME as usize] = 0;
        raw
    }

    fn read_byte(&self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match (&self.file).read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(VmError::terminal_io("read from tty failed", e)),
            }
        }
    }

    fn window_size(&self) -> Result<WindowSize> {
        let (cols, rows) = ratatui::crossterm::terminal::size()
            .map_err(|e| VmError::terminal_io("failed to query window size", e))?;
        Ok(WindowSize::new(rows, cols))
    }
}
