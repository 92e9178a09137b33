use std::fmt;

use chrono::{DateTime, Utc};

use crate::InteractionKind;

/// Advisory conditions and lifecycle notices reported by a gate.
///
/// None of these are fatal. The warnings describe calls that were ignored;
/// the rest describe what the gate did. Every diagnostic goes to the gate's
/// [`DiagnosticSink`](super::DiagnosticSink).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    // lifecycle
    Armed {
        signals: Vec<InteractionKind>,
    },
    Inert,
    Fired {
        signal: InteractionKind,
        pending: usize,
        at: DateTime<Utc>,
    },
    Drained {
        invoked: usize,
        failed: usize,
    },

    // ignored calls
    LateAdd,
    LateRemove,
    MissingListener {
        /// Position of the listener within the removal batch.
        position: usize,
    },

    // listener failures
    ListenerFailed {
        /// Position of the listener within the drain.
        position: usize,
        message: String,
    },
}

impl Diagnostic {
    /// Returns a dot-separated diagnostic name for logging/tracing.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Armed { .. } => "gate.armed",
            Self::Inert => "gate.inert",
            Self::Fired { .. } => "gate.fired",
            Self::Drained { .. } => "gate.drained",
            Self::LateAdd => "registry.late_add",
            Self::LateRemove => "registry.late_remove",
            Self::MissingListener { .. } => "registry.missing_listener",
            Self::ListenerFailed { .. } => "listener.failed",
        }
    }

    /// Returns the severity this diagnostic is reported at.
    pub fn level(&self) -> log::Level {
        match self {
            Self::Armed { .. } | Self::Fired { .. } => log::Level::Info,
            Self::Inert | Self::Drained { .. } => log::Level::Debug,
            Self::LateAdd | Self::LateRemove | Self::MissingListener { .. } => log::Level::Warn,
            Self::ListenerFailed { .. } => log::Level::Error,
        }
    }

    /// True for the advisory warnings about ignored calls.
    pub fn is_warning(&self) -> bool {
        self.level() == log::Level::Warn
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Armed { signals } if signals.is_empty() => {
                write!(f, "waiting for first interaction")
            }
            Self::Armed { signals } => {
                write!(f, "waiting for first interaction on")?;
                for signal in signals {
                    write!(f, " {signal}")?;
                }
                Ok(())
            }
            Self::Inert => write!(f, "no page environment; listeners will never run"),
            Self::Fired {
                signal, pending, ..
            } => write!(f, "first interaction ({signal}); running {pending} listener(s)"),
            Self::Drained { invoked, failed } => {
                write!(f, "drain finished: {invoked} ran, {failed} failed")
            }
            Self::LateAdd => write!(
                f,
                "listener already triggered by interaction; adding a function now has no effect"
            ),
            Self::LateRemove => write!(
                f,
                "listener already triggered by interaction; removing a function now has no effect"
            ),
            Self::MissingListener { position } => write!(
                f,
                "listener at position {position} was never added and could not be removed"
            ),
            Self::ListenerFailed { position, message } => {
                write!(f, "listener at position {position} panicked: {message}")
            }
        }
    }
}
