use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use super::{CommentSyntax, LanguageRegistry};

/// Cloneable handle to a registry that can be swapped wholesale.
///
/// Every clone observes a [`replace`](Self::replace) on its next read. Reads
/// hand out an `Arc` snapshot, so a caller holding a snapshot keeps a stable
/// view while others see the new table.
#[derive(Debug, Clone)]
pub struct SharedRegistry {
    inner: Arc<RwLock<Arc<LanguageRegistry>>>,
}

impl SharedRegistry {
    #[must_use]
    pub fn new(registry: LanguageRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(registry))),
        }
    }

    /// The registry as of this call.
    #[must_use]
    pub fn snapshot(&self) -> Arc<LanguageRegistry> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Comment syntax for `name` in the current registry; empty when unknown.
    #[must_use]
    pub fn lookup(&self, name: &str) -> CommentSyntax {
        self.snapshot().lookup(name).clone()
    }

    /// Swaps in `registry` as a whole. Snapshots taken before the swap are
    /// unaffected.
    pub fn replace(&self, registry: LanguageRegistry) {
        let languages = registry.len();
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(registry);
        drop(guard);
        info!(languages, "language registry replaced");
    }
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new(LanguageRegistry::builtin())
    }
}

impl From<LanguageRegistry> for SharedRegistry {
    fn from(registry: LanguageRegistry) -> Self {
        Self::new(registry)
    }
}

#[cfg(test)]
#[path = "shared_tests.rs"]
mod tests;
