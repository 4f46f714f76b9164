mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{Config, CustomLanguageConfig, ScannerConfig};

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
