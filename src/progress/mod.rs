//! Cosmetic console progress indicator.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use tracing::warn;

/// Glyph printed when none is configured.
pub const DEFAULT_GLYPH: &str = "#";

/// Prints a glyph `total + 1` times with a pause between prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressBar {
    glyph: String,
    total: u32,
    delay: Duration,
}

impl ProgressBar {
    /// Create a bar. An empty glyph falls back to [`DEFAULT_GLYPH`].
    pub fn new(glyph: impl Into<String>, total: u32, delay: Duration) -> Self {
        let mut glyph = glyph.into();
        if glyph.is_empty() {
            glyph = DEFAULT_GLYPH.to_string();
        }
        Self {
            glyph,
            total,
            delay,
        }
    }

    /// Number of glyphs a full run prints.
    pub fn steps(&self) -> u64 {
        u64::from(self.total) + 1
    }

    /// Draw the bar on `out`, then end the line.
    ///
    /// A failed write is logged and the run stops early; nothing is returned.
    pub fn run<W: Write>(&self, out: &mut W) {
        if let Err(error) = self.draw(out) {
            warn!(%error, "Progress output interrupted");
        }
    }

    /// Draw the bar on stdout.
    pub fn run_stdout(&self) {
        self.run(&mut io::stdout().lock());
    }

    fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for _ in 0..self.steps() {
            out.write_all(self.glyph.as_bytes())?;
            out.flush()?;
            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }
        writeln!(out)
    }
}
