use crate::diagnostics::{Diagnostic, DiagnosticSink};

/// Emits diagnostics as tracing events.
///
/// Requires the `tracing` feature to be enabled.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use first_interaction::diagnostics::TracingSink;
/// use first_interaction::{facade, GateConfig, Window};
///
/// facade::install_with(&window, GateConfig::default(), Arc::new(TracingSink));
/// ```
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        let name = diagnostic.name();
        match diagnostic.level() {
            log::Level::Error => {
                tracing::error!(target: "first_interaction", diagnostic = name, "{diagnostic}")
            }
            log::Level::Warn => {
                tracing::warn!(target: "first_interaction", diagnostic = name, "{diagnostic}")
            }
            log::Level::Info => {
                tracing::info!(target: "first_interaction", diagnostic = name, "{diagnostic}")
            }
            log::Level::Debug => {
                tracing::debug!(target: "first_interaction", diagnostic = name, "{diagnostic}")
            }
            log::Level::Trace => {
                tracing::trace!(target: "first_interaction", diagnostic = name, "{diagnostic}")
            }
        }
    }
}
