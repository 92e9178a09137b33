//! Built-in diagnostic sinks.
//!
//! Pass one to [`InteractionGate::bootstrap_with`](crate::InteractionGate::bootstrap_with)
//! or [`facade::install_with`](crate::facade::install_with).

mod logging;
mod memory;
#[cfg(feature = "tracing")]
mod tracing;

pub use logging::LoggingSink;
pub use memory::MemorySink;
#[cfg(feature = "tracing")]
pub use self::tracing::TracingSink;
