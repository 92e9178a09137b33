use std::fmt;
use std::sync::Arc;

use super::{EventTarget, Host};

/// A host with a rendered page.
#[derive(Clone)]
pub struct Window {
    document: Arc<dyn EventTarget>,
}

impl Window {
    pub fn new(document: Arc<dyn EventTarget>) -> Self {
        Self { document }
    }
}

impl Host for Window {
    fn document(&self) -> Option<Arc<dyn EventTarget>> {
        Some(self.document.clone())
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window").finish_non_exhaustive()
    }
}

/// A host with no page, such as a server-side render or a test harness.
///
/// Gates bootstrapped against it stay inert forever.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl Host for Headless {
    fn document(&self) -> Option<Arc<dyn EventTarget>> {
        None
    }
}
