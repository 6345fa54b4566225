//! Per-line character counts produced by a report pass.

/// Character count of one line, keyed by its zero-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCount {
    /// Zero-based line index in source order.
    pub index: usize,
    /// Unicode scalar values in the line, separator excluded.
    pub count: usize,
}

/// Result of analyzing one file.
///
/// `total` is always the sum of `lines[..].count`, and recounting `text`
/// (with separators stripped) yields the same total.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileAnalysis {
    /// Lines rejoined with `\n`, including a trailing `\n` after the last.
    pub text: String,
    /// Per-line counts in source order.
    pub lines: Vec<LineCount>,
    /// Sum of all per-line counts.
    pub total: usize,
}

impl FileAnalysis {
    /// Build from an ordered sequence of lines.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut text = String::new();
        let counts: Vec<LineCount> = lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| {
                text.push_str(line);
                text.push('\n');
                LineCount {
                    index,
                    count: line.chars().count(),
                }
            })
            .collect();
        let total = total_characters(&counts);

        Self {
            text,
            lines: counts,
            total,
        }
    }

    /// Number of lines in the file.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Fold the per-line counts into a total.
pub fn total_characters(lines: &[LineCount]) -> usize {
    lines.iter().map(|l| l.count).sum()
}
