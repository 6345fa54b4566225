//! Operator input sources.
//!
//! The input validator reads through the [`LineSource`] capability so tests
//! can substitute scripted input for the terminal.

use std::collections::VecDeque;
use std::io;

pub mod stdin;

pub use stdin::ConsoleSource;

/// A blocking supplier of input lines.
pub trait LineSource {
    /// Read the next line without its terminator.
    ///
    /// Blocks until a line is available. Returns `Ok(None)` once the source
    /// is exhausted.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if reading fails.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Pre-recorded lines, handed out front to back.
impl LineSource for VecDeque<String> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.pop_front())
    }
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        (**self).next_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_lines_come_back_in_order() {
        let mut script: VecDeque<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();

        assert_eq!(script.next_line().unwrap(), Some("a".to_string()));
        assert_eq!(script.next_line().unwrap(), Some("b".to_string()));
        assert_eq!(script.next_line().unwrap(), None);
    }

    fn drain<S: LineSource>(mut source: S) -> Vec<String> {
        let mut lines = Vec::new();
        while let Some(line) = source.next_line().unwrap() {
            lines.push(line);
        }
        lines
    }

    #[test]
    fn mutable_reference_forwards_to_source() {
        let data = b"x\ny\n";
        let mut console = ConsoleSource::from_reader(&data[..]);

        assert_eq!(drain(&mut console), vec!["x".to_string(), "y".to_string()]);
        assert!(console.is_complete());
    }
}
