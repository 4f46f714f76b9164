//! Batch scanning of `(path, language)` pairs into per-file line counts.

mod batch;
mod types;

pub use batch::{ScanOptions, Scanner};
pub use types::{FileDescriptor, ScanResult};
