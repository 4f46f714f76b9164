//! Shared test fixtures for counter tests.
//!
//! Provides common `CommentSyntax` configurations used across both
//! `comment_tests` and `sloc_tests` modules.

use crate::language::CommentSyntax;

/// C-family syntax: `//` lines and `/* */` blocks
pub fn c_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["//"], vec![("/*", "*/")])
}

/// Python syntax with triple-quoted strings as multi-line comments
pub fn python_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["#"], vec![("\"\"\"", "\"\"\""), ("'''", "'''")])
}

/// Ruby syntax with =begin/=end multi-line comments
pub fn ruby_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["#"], vec![("=begin", "=end")])
}

/// SQL syntax with -- single-line and /* */ multi-line comments
pub fn sql_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["--"], vec![("/*", "*/")])
}
