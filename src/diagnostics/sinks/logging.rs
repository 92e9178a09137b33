use crate::diagnostics::{Diagnostic, DiagnosticSink};

/// Logs diagnostics using the `log` crate, under the `first_interaction`
/// target.
///
/// By default each diagnostic is logged at its own [`Diagnostic::level`].
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use first_interaction::diagnostics::LoggingSink;
/// use first_interaction::{GateConfig, Headless, InteractionGate};
///
/// let gate = InteractionGate::bootstrap_with(
///     &Headless,
///     GateConfig::default(),
///     Arc::new(LoggingSink::with_level(log::Level::Debug)),
/// );
/// ```
pub struct LoggingSink {
    level: Option<log::Level>,
}

impl LoggingSink {
    /// Creates a sink that logs each diagnostic at its own level.
    pub fn new() -> Self {
        Self { level: None }
    }

    /// Creates a sink that logs every diagnostic at the specified level.
    pub fn with_level(level: log::Level) -> Self {
        Self { level: Some(level) }
    }

    fn level_for(&self, diagnostic: &Diagnostic) -> log::Level {
        self.level.unwrap_or_else(|| diagnostic.level())
    }
}

impl Default for LoggingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for LoggingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        log::log!(
            target: "first_interaction",
            self.level_for(diagnostic),
            "{}: {}",
            diagnostic.name(),
            diagnostic
        );
    }
}
