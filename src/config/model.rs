use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::counter::InlineBlockPolicy;
use crate::error::{Result, SlocTallyError};
use crate::language::LanguageRegistry;

/// Top-level configuration, read from `.sloc-tally.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Start from an empty language table instead of the built-in one.
    #[serde(default)]
    pub replace_builtin_languages: bool,

    /// Custom or overriding language definitions `[languages.X]`.
    #[serde(default)]
    pub languages: IndexMap<String, CustomLanguageConfig>,

    #[serde(default)]
    pub scanner: ScannerConfig,
}

/// Comment tokens for one language as written in the config file.
///
/// `multi_line_comments` is an ordered list of `[open, close]` pairs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomLanguageConfig {
    #[serde(default)]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub single_line_comments: Vec<String>,

    #[serde(default)]
    pub multi_line_comments: Vec<(String, String)>,
}

/// File discovery and scanning behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Respect .gitignore rules (default: true)
    #[serde(default = "default_true")]
    pub gitignore: bool,

    /// Exclude patterns (glob syntax) applied on top of .gitignore.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Only scan these extensions; empty means every extension with a known language.
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Scan files on the rayon thread pool.
    #[serde(default)]
    pub parallel: bool,

    #[serde(default)]
    pub inline_block: InlineBlockPolicy,
}

const fn default_true() -> bool {
    true
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            gitignore: true,
            exclude: Vec::new(),
            extensions: Vec::new(),
            parallel: false,
            inline_block: InlineBlockPolicy::default(),
        }
    }
}

impl Config {
    /// Rejects language entries with empty comment tokens.
    ///
    /// # Errors
    /// Returns `SlocTallyError::Config` naming the first offending language.
    pub fn validate(&self) -> Result<()> {
        for (name, lang) in &self.languages {
            if name.trim().is_empty() {
                return Err(SlocTallyError::Config(
                    "language name must not be empty".to_string(),
                ));
            }
            if lang.single_line_comments.iter().any(String::is_empty) {
                return Err(SlocTallyError::Config(format!(
                    "language '{name}': single_line_comments contains an empty token"
                )));
            }
            if lang
                .multi_line_comments
                .iter()
                .any(|(open, close)| open.is_empty() || close.is_empty())
            {
                return Err(SlocTallyError::Config(format!(
                    "language '{name}': multi_line_comments contains an empty token"
                )));
            }
            if lang.extensions.iter().any(|e| e.is_empty() || e.starts_with('.')) {
                return Err(SlocTallyError::Config(format!(
                    "language '{name}': extensions must be non-empty and given without a leading dot"
                )));
            }
        }
        Ok(())
    }

    /// Builds the effective language registry.
    #[must_use]
    pub fn registry(&self) -> LanguageRegistry {
        let base = if self.replace_builtin_languages {
            LanguageRegistry::new()
        } else {
            LanguageRegistry::builtin()
        };
        LanguageRegistry::with_custom_languages(base, &self.languages)
    }
}
