mod registry;
mod shared;

pub use registry::{CommentSyntax, Language, LanguageRegistry};
pub use shared::SharedRegistry;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
