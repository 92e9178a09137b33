use std::sync::{Arc, Mutex, MutexGuard};

use crate::diagnostics::{Diagnostic, DiagnosticSink};

/// Keeps every diagnostic in memory.
///
/// Useful in tests, or for embedders that want to surface the warnings
/// themselves. Clones share the same buffer.
#[derive(Clone, Default)]
pub struct MemorySink {
    pub diagnostics: Arc<Mutex<Vec<Diagnostic>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything recorded so far.
    pub fn recorded(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Returns only the advisory warnings.
    pub fn warnings(&self) -> Vec<Diagnostic> {
        self.lock()
            .iter()
            .filter(|d| d.is_warning())
            .cloned()
            .collect()
    }

    /// Returns how many diagnostics with the given name were recorded.
    pub fn count(&self, name: &str) -> usize {
        self.lock().iter().filter(|d| d.name() == name).count()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.lock().push(diagnostic.clone());
    }
}
