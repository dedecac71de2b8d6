//! # Console Prompts
//!
//! Line-buffered prompt plumbing over generic reader/writer pairs.
//!
//! ## Why Generic I/O?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Console<R, W>                                     │
//! │                                                                         │
//! │  Production:   Console<StdinLock, StdoutLock>                           │
//! │  Tests:        Console<Cursor<&[u8]>, Vec<u8>>                          │
//! │                                                                         │
//! │  The session loop never names stdin or stdout, so every interactive     │
//! │  path can be driven by a scripted byte buffer and its full transcript   │
//! │  asserted on.                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};

use takeout_core::input::parse_quantity;

/// A prompt/response console over a buffered reader and a writer.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Console { reader, writer }
    }

    /// Prints `text` without a trailing newline, flushes, and reads one
    /// line of input. Returns the line with surrounding whitespace trimmed.
    ///
    /// EOF on the reader is an error: the interactive contract assumes the
    /// user is present, so a closed stdin ends the program.
    pub fn prompt(&mut self, text: &str) -> io::Result<String> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;

        let mut raw = String::new();
        if self.reader.read_line(&mut raw)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the order was finished",
            ));
        }
        Ok(raw.trim().to_string())
    }

    /// Prints one line of output.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)
    }

    /// Prints pre-rendered output (menu table, receipt) verbatim.
    pub fn print(&mut self, rendered: &str) -> io::Result<()> {
        write!(self.writer, "{}", rendered)?;
        self.writer.flush()
    }

    /// Consumes the console, returning the writer. Test helper for
    /// inspecting the transcript.
    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

/// Repeatedly solicits a quantity for `item_name` until the input is a
/// positive integer.
///
/// If `preset` is supplied it is taken as the first raw attempt; on
/// rejection the loop falls back to interactive input. The loop is
/// unbounded and has no cancellation path: it returns on the first valid
/// quantity, printing the validation message and re-prompting on every
/// rejection.
pub fn prompt_quantity<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    item_name: &str,
    preset: Option<&str>,
) -> io::Result<u32> {
    if let Some(raw) = preset {
        match parse_quantity(raw) {
            Ok(quantity) => return Ok(quantity),
            Err(err) => console.say(&err.to_string())?,
        }
    }

    loop {
        let raw = console.prompt(&format!(
            "How many {} would you like to order? ",
            item_name
        ))?;
        match parse_quantity(&raw) {
            Ok(quantity) => {
                tracing::debug!(item = item_name, quantity, "quantity accepted");
                return Ok(quantity);
            }
            Err(err) => console.say(&err.to_string())?,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
