//! Output sanitization for document text.
//!
//! Document bytes are untrusted: a raw `ESC` would let the file drive the user's
//! terminal. Every control byte other than newline and tab is written in caret
//! notation instead (`ESC` becomes `^[`, `DEL` becomes `^?`).

use std::io::{self, Write};

/// True for bytes that must never reach the terminal verbatim
pub fn is_unsafe(byte: u8) -> bool {
    (byte < 0x20 && byte != b'\n' && byte != b'\t') || byte == 0x7f
}

/// Caret-notation spelling of a control byte
pub fn caret(byte: u8) -> [u8; 2] {
    [b'^', byte ^ 0x40]
}

/// Write `bytes`, replacing unsafe bytes with their caret notation.
pub fn write_sanitized<W: Write>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    let mut run_start = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        if is_unsafe(byte) {
            out.write_all(&bytes[run_start..i])?;
            out.write_all(&caret(byte))?;
            run_start = i + 1;
        }
    }
    out.write_all(&bytes[run_start..])
}

/// Sanitized, lossily decoded text for short strings such as file names and patterns
pub fn sanitized_string(bytes: &[u8]) -> String {
    let mut out = Vec::with_capacity(bytes.len());
    // Writing into a Vec cannot fail
    let _ = write_sanitized(&mut out, bytes);
    String::from_utf8_lossy(&out).into_owned()
}
