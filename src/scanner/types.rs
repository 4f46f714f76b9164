use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::counter::LineStats;

/// A file to scan and the language it was resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FileDescriptor {
    pub path: PathBuf,
    pub language: String,
}

impl FileDescriptor {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, language: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            language: language.into(),
        }
    }
}

/// Line counts for one scanned file.
///
/// `stats.code` counts every line of the file; see [`LineStats`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub file: FileDescriptor,
    pub stats: LineStats,
}

impl ScanResult {
    #[must_use]
    pub const fn new(file: FileDescriptor, stats: LineStats) -> Self {
        Self { file, stats }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file.path
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.file.language
    }

    #[must_use]
    pub const fn code_lines(&self) -> usize {
        self.stats.code
    }

    #[must_use]
    pub const fn blank_lines(&self) -> usize {
        self.stats.blank
    }

    #[must_use]
    pub const fn comment_lines(&self) -> usize {
        self.stats.comment
    }
}
