use std::fs::File;
use std::io::{BufRead, BufReader};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::counter::{InlineBlockPolicy, LineCounter};
use crate::error::{BatchScanError, Result, SlocTallyError};
use crate::language::{LanguageRegistry, SharedRegistry};

use super::{FileDescriptor, ScanResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    pub inline_block: InlineBlockPolicy,
    /// Scan files on the rayon pool. Results keep input order either way.
    pub parallel: bool,
}

impl ScanOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_inline_block(mut self, policy: InlineBlockPolicy) -> Self {
        self.inline_block = policy;
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Classifies the lines of each file against a shared language registry.
///
/// Each file is read with a registry snapshot taken when its scan starts, so
/// a [`replace_languages`](Self::replace_languages) during a batch affects
/// only files that have not started yet.
#[derive(Debug, Clone)]
pub struct Scanner {
    registry: SharedRegistry,
    options: ScanOptions,
}

impl Scanner {
    #[must_use]
    pub fn new(registry: SharedRegistry) -> Self {
        Self {
            registry,
            options: ScanOptions::default(),
        }
    }

    #[must_use]
    pub const fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub const fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn options(&self) -> ScanOptions {
        self.options
    }

    /// Swaps the whole language table for this scanner and every clone of its registry handle.
    pub fn replace_languages(&self, registry: LanguageRegistry) {
        self.registry.replace(registry);
    }

    /// Scans `files` in order, one result per file.
    ///
    /// # Errors
    /// Stops at the first file that cannot be read. The error carries the
    /// results of every file before it.
    pub fn scan(
        &self,
        files: &[FileDescriptor],
    ) -> std::result::Result<Vec<ScanResult>, BatchScanError> {
        if self.options.parallel {
            self.scan_parallel(files)
        } else {
            self.scan_sequential(files)
        }
    }

    /// Scans one file after another on the calling thread.
    ///
    /// # Errors
    /// See [`scan`](Self::scan).
    pub fn scan_sequential(
        &self,
        files: &[FileDescriptor],
    ) -> std::result::Result<Vec<ScanResult>, BatchScanError> {
        let mut completed = Vec::with_capacity(files.len());

        for file in files {
            match self.scan_file(file) {
                Ok(result) => completed.push(result),
                Err(e) => return Err(abort(completed, e)),
            }
        }

        Ok(completed)
    }

    /// Scans files on the rayon pool, returning results in input order.
    ///
    /// Once a file fails, files later in the input are skipped; files
    /// earlier in the input still complete so the partial results match
    /// what [`scan_sequential`](Self::scan_sequential) would return.
    ///
    /// # Errors
    /// See [`scan`](Self::scan). The error is the one for the earliest
    /// failing file in input order.
    pub fn scan_parallel(
        &self,
        files: &[FileDescriptor],
    ) -> std::result::Result<Vec<ScanResult>, BatchScanError> {
        let first_failure = AtomicUsize::new(usize::MAX);

        let outcomes: Vec<Option<Result<ScanResult>>> = files
            .par_iter()
            .enumerate()
            .map(|(idx, file)| {
                if idx > first_failure.load(Ordering::Relaxed) {
                    return None;
                }
                let outcome = self.scan_file(file);
                if outcome.is_err() {
                    first_failure.fetch_min(idx, Ordering::Relaxed);
                }
                Some(outcome)
            })
            .collect();

        // A skipped file always sits after a failed one, so the failure is
        // reached before any gap.
        let mut completed = Vec::with_capacity(files.len());
        for outcome in outcomes.into_iter().flatten() {
            match outcome {
                Ok(result) => completed.push(result),
                Err(e) => return Err(abort(completed, e)),
            }
        }

        Ok(completed)
    }

    /// Opens and scans a single file.
    ///
    /// # Errors
    /// Returns `SlocTallyError::FileRead` if the file cannot be opened or read.
    pub fn scan_file(&self, file: &FileDescriptor) -> Result<ScanResult> {
        let handle = File::open(&file.path).map_err(|source| SlocTallyError::FileRead {
            path: file.path.clone(),
            source,
        })?;
        self.scan_reader(file.clone(), BufReader::new(handle))
    }

    /// Scans already-open content on behalf of `file`.
    ///
    /// # Errors
    /// Returns `SlocTallyError::FileRead` if reading fails part way.
    pub fn scan_reader<R: BufRead>(&self, file: FileDescriptor, reader: R) -> Result<ScanResult> {
        let registry = self.registry.snapshot();
        if !registry.contains(&file.language) {
            debug!(
                path = %file.path.display(),
                language = %file.language,
                "unknown language, counting without comment tokens"
            );
        }

        let counter = LineCounter::new(registry.lookup(&file.language))
            .with_policy(self.options.inline_block);
        let stats = counter
            .count_reader(reader)
            .map_err(|source| SlocTallyError::FileRead {
                path: file.path.clone(),
                source,
            })?;

        debug!(
            path = %file.path.display(),
            lines = stats.code,
            blank = stats.blank,
            comment = stats.comment,
            "scanned file"
        );
        Ok(ScanResult::new(file, stats))
    }
}

fn abort(completed: Vec<ScanResult>, source: SlocTallyError) -> BatchScanError {
    warn!(completed = completed.len(), error = %source, "batch scan aborted");
    BatchScanError::new(completed, source)
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
