#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the sloc-tally binary.
#[macro_export]
macro_rules! sloc_tally {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("sloc-tally"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".sloc-tally.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Go source: 9 lines, 2 blank, 5 comment.
pub const GO_SOURCE: &str = "package main

// Entry point.
/* block
   continues
*/

func main() {}
// done
";

/// Python source: 6 lines, 1 blank, 4 comment.
pub const PYTHON_SOURCE: &str = r#"# helper
def f():
    """
    doc
    """

"#;

/// Config that disables gitignore so fixtures are scanned as written.
pub const PLAIN_CONFIG: &str = r#"
[scanner]
gitignore = false
"#;

/// Config adding a custom language.
pub const CUSTOM_LANGUAGE_CONFIG: &str = r#"
[scanner]
gitignore = false

[languages.Zig]
extensions = ["zig"]
single_line_comments = ["//"]
"#;
