use super::Diagnostic;

/// Receives the diagnostics a gate produces.
///
/// Implement this trait to route diagnostics somewhere other than the
/// `log` crate. Sinks are called synchronously and never while the gate
/// holds a lock, so a sink may call back into the gate.
///
/// # Example
///
/// ```rust
/// use first_interaction::diagnostics::{Diagnostic, DiagnosticSink};
///
/// struct StderrSink;
///
/// impl DiagnosticSink for StderrSink {
///     fn emit(&self, diagnostic: &Diagnostic) {
///         if diagnostic.is_warning() {
///             eprintln!("{}: {diagnostic}", diagnostic.name());
///         }
///     }
/// }
/// ```
pub trait DiagnosticSink: Send + Sync + 'static {
    /// Handle a diagnostic.
    fn emit(&self, diagnostic: &Diagnostic);
}
