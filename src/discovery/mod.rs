//! File discovery: turns command-line paths into `(path, language)` pairs.

mod filter;

pub use filter::{FileFilter, GlobFilter};

use std::path::{Component, Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Result, SlocTallyError};
use crate::language::LanguageRegistry;
use crate::scanner::FileDescriptor;

/// Language name given to explicitly listed files whose extension is unknown.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

pub struct DirectoryWalker<F: FileFilter> {
    filter: F,
    use_gitignore: bool,
}

impl<F: FileFilter> DirectoryWalker<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            use_gitignore: false,
        }
    }

    #[must_use]
    pub const fn with_gitignore(filter: F, use_gitignore: bool) -> Self {
        Self {
            filter,
            use_gitignore,
        }
    }

    /// All files under `root` accepted by the filter.
    ///
    /// # Errors
    /// Returns `SlocTallyError::FileRead` if `root` does not exist.
    pub fn walk(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Err(SlocTallyError::FileRead {
                path: root.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "path does not exist"),
            });
        }

        Ok(if self.use_gitignore {
            self.walk_with_gitignore(root)
        } else {
            self.walk_without_gitignore(root)
        })
    }

    fn walk_without_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file() && self.filter.should_include(e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect()
    }

    fn walk_with_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        use ignore::WalkBuilder;

        WalkBuilder::new(root)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .hidden(false)
            .parents(false)
            .build()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
            .filter(|e| self.filter.should_include(e.path()))
            .map(ignore::DirEntry::into_path)
            .collect()
    }

    /// Resolves `roots` to file descriptors, sorted by path.
    ///
    /// Directories are walked and only files whose extension maps to a
    /// registered language are kept. A root that is itself a file is kept if
    /// the filter accepts it; with an unknown extension it gets
    /// [`UNKNOWN_LANGUAGE`]. Paths are compared with `.` components removed,
    /// so overlapping roots yield each file once.
    ///
    /// # Errors
    /// Returns an error if a root does not exist.
    pub fn discover(
        &self,
        roots: &[PathBuf],
        registry: &LanguageRegistry,
    ) -> Result<Vec<FileDescriptor>> {
        let mut files = Vec::new();

        for root in roots {
            if root.is_file() {
                if !self.filter.should_include(root) {
                    debug!(path = %root.display(), "file root excluded by filter");
                    continue;
                }
                let language = registry
                    .language_for_path(root)
                    .map_or(UNKNOWN_LANGUAGE, |lang| lang.name.as_str());
                files.push(FileDescriptor::new(normalize(root), language));
                continue;
            }

            for path in self.walk(root)? {
                let path = normalize(&path);
                match registry.language_for_path(&path) {
                    Some(lang) => files.push(FileDescriptor::new(path, lang.name.as_str())),
                    None => debug!(path = %path.display(), "skipping file with unknown extension"),
                }
            }
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        files.dedup_by(|a, b| a.path == b.path);
        debug!(files = files.len(), "discovered files");
        Ok(files)
    }
}

/// Drops `.` components: `./src/a.rs` and `src/a.rs` name the same file.
fn normalize(path: &Path) -> PathBuf {
    let normalized: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if normalized.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        normalized
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
