mod comment;
mod sloc;

pub use comment::CommentDetector;
pub use sloc::{InlineBlockPolicy, LineCounter, LineKind, LineStats, ScanState};

#[cfg(test)]
mod test_fixtures;
