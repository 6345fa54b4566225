//! Line-oriented console source.
//!
//! Provides ConsoleSource for reading operator input one line at a time
//! from stdin or any buffered reader.

use super::LineSource;
use std::io::{self, BufRead, StdinLock};

/// Blocking line reader over a buffered input.
///
/// # Design
///
/// - Blocks until a full line or EOF is available
/// - Tracks EOF state via `complete` flag
/// - Strips the line terminator (`\n` or `\r\n`) from each line
/// - Decodes lossily: invalid UTF-8 becomes U+FFFD instead of an error
pub struct ConsoleSource<R: BufRead> {
    reader: R,
    complete: bool,
}

impl ConsoleSource<StdinLock<'static>> {
    /// Create a ConsoleSource reading from the process stdin.
    pub fn stdin() -> Self {
        Self::from_reader(io::stdin().lock())
    }
}

impl<R: BufRead> ConsoleSource<R> {
    /// Create ConsoleSource from any buffered reader.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            complete: false,
        }
    }

    /// Check if EOF has been reached (no more data will arrive).
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

impl<R: BufRead> LineSource for ConsoleSource<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        if self.complete {
            return Ok(None);
        }

        let mut bytes = Vec::new();
        let bytes_read = self.reader.read_until(b'\n', &mut bytes)?;
        if bytes_read == 0 {
            self.complete = true;
            return Ok(None);
        }

        if bytes.ends_with(b"\n") {
            bytes.pop();
            if bytes.ends_with(b"\r") {
                bytes.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}
