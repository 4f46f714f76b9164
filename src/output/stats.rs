use std::cmp::Reverse;
use std::io::Write;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;

use crate::counter::LineStats;
use crate::error::Result;
use crate::scanner::ScanResult;

/// Totals for every file of one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageSummary {
    pub name: String,
    pub files: usize,
    #[serde(flatten)]
    pub stats: LineStats,
}

/// Ordering of the language summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Files,
    #[default]
    Code,
    Comment,
    Blank,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" | "language" => Ok(Self::Name),
            "files" => Ok(Self::Files),
            "code" | "lines" => Ok(Self::Code),
            "comment" | "comments" => Ok(Self::Comment),
            "blank" | "blanks" => Ok(Self::Blank),
            _ => Err(format!("Unknown sort key: {s}")),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectStatistics {
    /// Per-file results in scan order.
    pub files: Vec<ScanResult>,
    pub languages: Vec<LanguageSummary>,
    pub total_files: usize,
    pub totals: LineStats,
}

impl ProjectStatistics {
    /// Aggregates scan results. Languages appear in first-seen order until
    /// [`sort_languages`](Self::sort_languages) is called.
    #[must_use]
    pub fn new(files: Vec<ScanResult>) -> Self {
        let mut by_language: IndexMap<&str, LanguageSummary> = IndexMap::new();
        let mut totals = LineStats::new();

        for result in &files {
            totals += result.stats;
            let summary = by_language
                .entry(result.language())
                .or_insert_with(|| LanguageSummary {
                    name: result.language().to_string(),
                    files: 0,
                    stats: LineStats::new(),
                });
            summary.files += 1;
            summary.stats += result.stats;
        }

        let languages = by_language.into_values().collect();

        Self {
            total_files: files.len(),
            files,
            languages,
            totals,
        }
    }

    /// Sorts languages by name ascending, or by count descending with ties broken by name.
    pub fn sort_languages(&mut self, key: SortKey) {
        match key {
            SortKey::Name => self.languages.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::Files => self.sort_desc(|l| l.files),
            SortKey::Code => self.sort_desc(|l| l.stats.code),
            SortKey::Comment => self.sort_desc(|l| l.stats.comment),
            SortKey::Blank => self.sort_desc(|l| l.stats.blank),
        }
    }

    #[must_use]
    pub fn with_sort(mut self, key: SortKey) -> Self {
        self.sort_languages(key);
        self
    }

    fn sort_desc(&mut self, count: impl Fn(&LanguageSummary) -> usize) {
        self.languages
            .sort_by(|a, b| (Reverse(count(a)), &a.name).cmp(&(Reverse(count(b)), &b.name)));
    }
}

pub trait StatsFormatter {
    /// Format the project statistics into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, stats: &ProjectStatistics) -> Result<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StatsTextFormatter {
    pub by_file: bool,
}

impl StatsTextFormatter {
    #[must_use]
    pub const fn new(by_file: bool) -> Self {
        Self { by_file }
    }
}

impl StatsFormatter for StatsTextFormatter {
    fn format(&self, stats: &ProjectStatistics) -> Result<String> {
        let mut output = Vec::new();

        if self.by_file {
            for file in &stats.files {
                writeln!(
                    output,
                    "{}: {} lines (code={}, comment={}, blank={}) [{}]",
                    file.path().display(),
                    file.stats.total_lines(),
                    file.stats.code,
                    file.stats.comment,
                    file.stats.blank,
                    file.language()
                )
                .ok();
            }
            if !stats.files.is_empty() {
                writeln!(output).ok();
            }
        }

        if !stats.languages.is_empty() {
            let width = stats
                .languages
                .iter()
                .map(|l| l.name.len())
                .max()
                .unwrap_or(0)
                .max("Language".len());
            writeln!(
                output,
                "{:<width$} {:>8} {:>10} {:>10} {:>10}",
                "Language", "Files", "Code", "Comment", "Blank"
            )
            .ok();
            for lang in &stats.languages {
                writeln!(
                    output,
                    "{:<width$} {:>8} {:>10} {:>10} {:>10}",
                    lang.name, lang.files, lang.stats.code, lang.stats.comment, lang.stats.blank
                )
                .ok();
            }
            writeln!(output).ok();
        }

        writeln!(output, "Summary:").ok();
        writeln!(output, "  Files: {}", stats.total_files).ok();
        writeln!(output, "  Total lines: {}", stats.totals.total_lines()).ok();
        writeln!(output, "  Code: {}", stats.totals.code).ok();
        writeln!(output, "  Comments: {}", stats.totals.comment).ok();
        writeln!(output, "  Blank: {}", stats.totals.blank).ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

pub struct StatsJsonFormatter;

#[derive(Serialize)]
struct JsonStatsOutput<'a> {
    summary: JsonStatsSummary,
    languages: &'a [LanguageSummary],
    files: Vec<JsonFileStats<'a>>,
}

#[derive(Serialize)]
struct JsonStatsSummary {
    total_files: usize,
    total_lines: usize,
    code: usize,
    comment: usize,
    blank: usize,
}

#[derive(Serialize)]
struct JsonFileStats<'a> {
    path: String,
    language: &'a str,
    code: usize,
    comment: usize,
    blank: usize,
}

impl StatsFormatter for StatsJsonFormatter {
    fn format(&self, stats: &ProjectStatistics) -> Result<String> {
        let output = JsonStatsOutput {
            summary: JsonStatsSummary {
                total_files: stats.total_files,
                total_lines: stats.totals.total_lines(),
                code: stats.totals.code,
                comment: stats.totals.comment,
                blank: stats.totals.blank,
            },
            languages: &stats.languages,
            files: stats
                .files
                .iter()
                .map(|f| JsonFileStats {
                    path: f.path().display().to_string(),
                    language: f.language(),
                    code: f.stats.code,
                    comment: f.stats.comment,
                    blank: f.stats.blank,
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
