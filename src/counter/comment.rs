use crate::language::CommentSyntax;

/// Token matching against one language's comment syntax.
///
/// All checks take an already trimmed line. Tokens inside string literals
/// are not special: a `//` in a string that starts the line still counts.
#[derive(Debug, Clone, Copy)]
pub struct CommentDetector<'a> {
    syntax: &'a CommentSyntax,
}

impl<'a> CommentDetector<'a> {
    #[must_use]
    pub const fn new(syntax: &'a CommentSyntax) -> Self {
        Self { syntax }
    }

    #[must_use]
    pub const fn syntax(&self) -> &'a CommentSyntax {
        self.syntax
    }

    #[must_use]
    pub fn is_single_line_comment(&self, trimmed: &str) -> bool {
        self.syntax
            .single_line
            .iter()
            .any(|prefix| trimmed.starts_with(prefix.as_str()))
    }

    /// The first declared block pair whose open token prefixes `trimmed`.
    ///
    /// Declaration order decides, not match length: with `("/*", "*/")`
    /// declared before `("/**", "**/")`, a `/**` line opens the first pair.
    #[must_use]
    pub fn find_block_open(&self, trimmed: &str) -> Option<(&'a str, &'a str)> {
        self.syntax
            .multi_line
            .iter()
            .find(|(open, _)| trimmed.starts_with(open.as_str()))
            .map(|(open, close)| (open.as_str(), close.as_str()))
    }

    #[must_use]
    pub fn contains_block_close(trimmed: &str, close: &str) -> bool {
        trimmed.contains(close)
    }
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
