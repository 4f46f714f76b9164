mod languages;
mod stats;

pub use languages::format_languages;
pub use stats::{
    LanguageSummary, ProjectStatistics, SortKey, StatsFormatter, StatsJsonFormatter,
    StatsTextFormatter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn stats_formatter(self, by_file: bool) -> Box<dyn StatsFormatter> {
        match self {
            Self::Text => Box::new(StatsTextFormatter::new(by_file)),
            Self::Json => Box::new(StatsJsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
