//! Diagnostics produced by interaction gates.
//!
//! A gate never fails loudly: calls it has to ignore (adding after the
//! first interaction, removing a listener that was never added) and
//! listeners that panic are reported as [`Diagnostic`]s instead. By default
//! they go to the `log` crate through [`LoggingSink`].
//!
//! # Custom Sinks
//!
//! ```rust
//! use std::sync::Arc;
//! use first_interaction::diagnostics::MemorySink;
//! use first_interaction::{GateConfig, Headless, InteractionGate, Listener};
//!
//! let sink = Arc::new(MemorySink::new());
//! let gate = InteractionGate::bootstrap_with(&Headless, GateConfig::default(), sink.clone());
//!
//! let stranger = Listener::new(|| {});
//! let _ = gate.remove_listener(&stranger);
//!
//! assert_eq!(sink.warnings().len(), 1);
//! ```

mod diagnostic;
mod sink;

pub mod sinks;

pub use diagnostic::Diagnostic;
pub use sink::DiagnosticSink;
pub use sinks::{LoggingSink, MemorySink};
#[cfg(feature = "tracing")]
pub use sinks::TracingSink;
