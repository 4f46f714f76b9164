use std::io::BufRead;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::language::CommentSyntax;

use super::CommentDetector;

/// Per-file line tallies.
///
/// The counts overlap: `code` is incremented for every line read, including
/// lines that are also tallied as `blank` or `comment`. It therefore always
/// equals the number of lines in the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStats {
    pub code: usize,
    pub blank: usize,
    pub comment: usize,
}

impl LineStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            code: 0,
            blank: 0,
            comment: 0,
        }
    }

    /// Number of physical lines; identical to `code`.
    #[must_use]
    pub const fn total_lines(&self) -> usize {
        self.code
    }

    /// Tallies one classified line.
    pub const fn record(&mut self, kind: LineKind) {
        self.code += 1;
        match kind {
            LineKind::Blank => self.blank += 1,
            LineKind::Comment => self.comment += 1,
            LineKind::Code => {}
        }
    }
}

impl Add for LineStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            code: self.code + other.code,
            blank: self.blank + other.blank,
            comment: self.comment + other.comment,
        }
    }
}

impl AddAssign for LineStats {
    fn add_assign(&mut self, other: Self) {
        self.code += other.code;
        self.blank += other.blank;
        self.comment += other.comment;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Code,
    Blank,
    Comment,
}

/// Block comment state carried from one line to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState<'a> {
    #[default]
    Normal,
    InBlockComment { close: &'a str },
}

/// How a line that opens a block comment and closes it again is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InlineBlockPolicy {
    /// The opening line never checks for the close token; the comment runs
    /// until a later line contains it.
    #[default]
    Span,
    /// A close token after the open token on the same line ends the comment.
    Close,
}

impl FromStr for InlineBlockPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "span" => Ok(Self::Span),
            "close" => Ok(Self::Close),
            _ => Err(format!("Unknown inline block policy: {s}")),
        }
    }
}

pub struct LineCounter<'a> {
    detector: CommentDetector<'a>,
    policy: InlineBlockPolicy,
}

impl<'a> LineCounter<'a> {
    #[must_use]
    pub const fn new(syntax: &'a CommentSyntax) -> Self {
        Self {
            detector: CommentDetector::new(syntax),
            policy: InlineBlockPolicy::Span,
        }
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: InlineBlockPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Classifies one raw line and advances `state`.
    pub fn classify(&self, state: &mut ScanState<'a>, line: &str) -> LineKind {
        let trimmed = line.trim();

        if let ScanState::InBlockComment { close } = *state {
            if CommentDetector::contains_block_close(trimmed, close) {
                *state = ScanState::Normal;
            }
            return LineKind::Comment;
        }

        if trimmed.is_empty() {
            return LineKind::Blank;
        }

        if let Some((open, close)) = self.detector.find_block_open(trimmed) {
            let closed_inline = self.policy == InlineBlockPolicy::Close
                && CommentDetector::contains_block_close(&trimmed[open.len()..], close);
            if !closed_inline {
                *state = ScanState::InBlockComment { close };
            }
            return LineKind::Comment;
        }

        if self.detector.is_single_line_comment(trimmed) {
            LineKind::Comment
        } else {
            LineKind::Code
        }
    }

    #[must_use]
    pub fn count(&self, source: &str) -> LineStats {
        let mut stats = LineStats::new();
        let mut state = ScanState::Normal;

        for line in source.lines() {
            stats.record(self.classify(&mut state, line));
        }

        stats
    }

    /// Per-line classification of `source`, in order.
    #[must_use]
    pub fn line_kinds(&self, source: &str) -> Vec<LineKind> {
        let mut state = ScanState::Normal;
        source
            .lines()
            .map(|line| self.classify(&mut state, line))
            .collect()
    }

    /// Count lines from a buffered reader (streaming, memory-efficient for large files).
    ///
    /// Lines are split on `\n`; invalid UTF-8 is replaced rather than rejected.
    ///
    /// # Errors
    /// Returns an I/O error if reading from the reader fails.
    pub fn count_reader<R: BufRead>(&self, mut reader: R) -> std::io::Result<LineStats> {
        let mut stats = LineStats::new();
        let mut state = ScanState::Normal;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            stats.record(self.classify(&mut state, &line));
        }

        Ok(stats)
    }
}

#[cfg(test)]
#[path = "sloc_tests.rs"]
mod tests;
