use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::counter::InlineBlockPolicy;
use crate::output::{OutputFormat, SortKey};

#[derive(Parser, Debug)]
#[command(name = "sloc-tally")]
#[command(author, version, about = "Count code, comment and blank lines per language")]
#[command(long_about = "Classifies every line of the scanned source files as code, comment or blank \
    and reports per-file, per-language and project totals.\n\n\
    Exit codes:\n  \
    0 - Scan completed\n  \
    1 - A file could not be read\n  \
    2 - Configuration or usage error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count lines in files and directories
    Scan(ScanArgs),

    /// List the languages and comment tokens in effect
    Languages(LanguagesArgs),
}

#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScanArgs {
    /// Paths to scan (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File extensions to scan (comma-separated, e.g., rs,go,py)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// List every file before the language summary (text format)
    #[arg(long)]
    pub by_file: bool,

    /// Language order [possible values: name, files, code, comment, blank]
    #[arg(long, default_value = "code")]
    pub sort: SortKey,

    /// Scan files in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Treatment of a block comment opened and closed on one line [possible values: span, close]
    #[arg(long)]
    pub inline_block: Option<InlineBlockPolicy>,

    /// Do not respect .gitignore files
    #[arg(long)]
    pub no_gitignore: bool,
}

#[derive(Parser, Debug)]
pub struct LanguagesArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
