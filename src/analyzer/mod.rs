//! Line-by-line character count of a text file.
//!
//! A single report pass reads the whole file, splits it into lines, and
//! produces the ordered `(index, count)` pairs plus their total. Printing the
//! report is a separate step ([`write_report`]); the returned
//! [`FileAnalysis`] is the only contract.

use crate::model::error::InputError;
use crate::model::report::FileAnalysis;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Read `path` and count the characters of every line.
///
/// The file handle is opened and released within this call. Nothing is
/// returned on failure; there is no partial result.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the path does not exist.
/// Returns `InputError::ReadError` if it exists but cannot be read as UTF-8
/// text.
pub fn analyze(path: impl AsRef<Path>) -> Result<FileAnalysis, InputError> {
    let path = path.as_ref();
    let content = read_text(path)?;
    let analysis = analyze_str(&content);

    info!(
        path = %path.display(),
        lines = analysis.line_count(),
        total = analysis.total,
        "File analyzed"
    );
    Ok(analysis)
}

/// Run the report pass over in-memory content.
pub fn analyze_str(content: &str) -> FileAnalysis {
    FileAnalysis::from_lines(split_lines(content))
}

fn read_text(path: &Path) -> Result<String, InputError> {
    let read_error = |source: io::Error| {
        if source.kind() == io::ErrorKind::NotFound {
            InputError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            InputError::ReadError {
                path: path.to_path_buf(),
                source,
            }
        }
    };

    let mut file = File::open(path).map_err(read_error)?;
    let mut content = String::new();
    file.read_to_string(&mut content).map_err(read_error)?;
    debug!(path = %path.display(), bytes = content.len(), "File read");
    Ok(content)
}

/// Split text on `\n`, `\r\n` or a lone `\r`.
///
/// Separators are dropped. A terminator at the very end does not start an
/// extra empty line, so `"a\n"` yields one line and `""` yields none.
pub fn split_lines(content: &str) -> SplitLines<'_> {
    SplitLines { rest: content }
}

/// Iterator returned by [`split_lines`].
#[derive(Debug, Clone)]
pub struct SplitLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(|c: char| c == '\n' || c == '\r') {
            Some(at) => {
                let (line, tail) = self.rest.split_at(at);
                let separator = if tail.starts_with("\r\n") { 2 } else { 1 };
                self.rest = &tail[separator..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// Print one line per entry and a closing total.
///
/// ```text
/// La línea 0 tiene 2 caracteres
/// La línea 1 tiene 0 caracteres
/// Total = 2 caracteres
/// ```
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_report<W: Write>(analysis: &FileAnalysis, out: &mut W) -> io::Result<()> {
    for line in &analysis.lines {
        writeln!(
            out,
            "La línea {} tiene {} caracteres",
            line.index, line.count
        )?;
    }
    writeln!(out, "Total = {} caracteres", analysis.total)
}

/// The report as a string.
pub fn render_report(analysis: &FileAnalysis) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_report(analysis, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}
