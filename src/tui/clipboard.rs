//! Clipboard access through the OSC 52 terminal escape sequence.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::{self, Write};

/// OSC 52 "set clipboard" sequence carrying `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Ask the terminal to place `text` on the system clipboard.
pub fn copy_to_clipboard<W: Write>(writer: &mut W, text: &str) -> io::Result<()> {
    log::debug!("copying {} bytes to clipboard", text.len());
    writer.write_all(osc52_sequence(text).as_bytes())?;
    writer.flush()
}
