use std::path::PathBuf;

use thiserror::Error;

use crate::scanner::ScanResult;

#[derive(Error, Debug)]
pub enum SlocTallyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl SlocTallyError {
    /// Short category name, logged alongside the message.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// Whether this error stems from user-supplied configuration rather than
    /// from reading source files.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::InvalidPattern { .. } | Self::TomlParse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SlocTallyError>;

/// A batch scan that stopped at the first failing file.
///
/// `completed` holds the results for every file that precedes the failing
/// one, in input order. No result exists for the failing file or anything
/// after it.
#[derive(Error, Debug)]
#[error("scan aborted after {} file(s): {source}", .completed.len())]
pub struct BatchScanError {
    pub completed: Vec<ScanResult>,
    #[source]
    pub source: SlocTallyError,
}

impl BatchScanError {
    #[must_use]
    pub const fn new(completed: Vec<ScanResult>, source: SlocTallyError) -> Self {
        Self { completed, source }
    }

    /// Splits the error into the partial results and the underlying cause.
    #[must_use]
    pub fn into_parts(self) -> (Vec<ScanResult>, SlocTallyError) {
        (self.completed, self.source)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
