pub mod cli;
pub mod config;
pub mod counter;
pub mod discovery;
pub mod error;
pub mod language;
pub mod logging;
pub mod output;
pub mod scanner;

pub use error::{BatchScanError, Result, SlocTallyError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_SCAN_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Exit code for a failed run.
#[must_use]
pub const fn exit_code_for(error: &SlocTallyError) -> i32 {
    if error.is_config_error() {
        EXIT_CONFIG_ERROR
    } else {
        EXIT_SCAN_ERROR
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
