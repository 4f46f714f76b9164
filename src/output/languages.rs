use std::fmt::Write;

use serde::Serialize;

use crate::error::Result;
use crate::language::LanguageRegistry;

use super::OutputFormat;

#[derive(Serialize)]
struct JsonLanguage<'a> {
    name: &'a str,
    extensions: &'a [String],
    single_line_comments: &'a [String],
    multi_line_comments: &'a [(String, String)],
}

/// Renders the effective language table.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn format_languages(registry: &LanguageRegistry, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let languages: Vec<JsonLanguage<'_>> = registry
                .all()
                .map(|lang| JsonLanguage {
                    name: &lang.name,
                    extensions: &lang.extensions,
                    single_line_comments: &lang.comment_syntax.single_line,
                    multi_line_comments: &lang.comment_syntax.multi_line,
                })
                .collect();
            Ok(serde_json::to_string_pretty(&languages)?)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for lang in registry.all() {
                let blocks: Vec<String> = lang
                    .comment_syntax
                    .multi_line
                    .iter()
                    .map(|(open, close)| format!("{open} {close}"))
                    .collect();
                let _ = writeln!(
                    out,
                    "{}: ext=[{}] line=[{}] block=[{}]",
                    lang.name,
                    lang.extensions.join(", "),
                    lang.comment_syntax.single_line.join(", "),
                    blocks.join(", ")
                );
            }
            Ok(out)
        }
    }
}
