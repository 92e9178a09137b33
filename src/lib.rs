//! Run callbacks exactly once, on the first user interaction with a page.
//!
//! An [`InteractionGate`] subscribes to five input signals on a document:
//! pointer press, pointer move, touch start, scroll, and key press.
//! Whichever arrives first runs every registered [`Listener`] once, in the
//! order they were added, after which the gate unsubscribes and ignores
//! further registrations.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use first_interaction::{InteractionGate, InteractionKind, Listener, LocalDocument, Window};
//!
//! let document = Arc::new(LocalDocument::new());
//! let gate = InteractionGate::bootstrap(&Window::new(document.clone()));
//!
//! let runs = Arc::new(AtomicUsize::new(0));
//! let counter = runs.clone();
//! gate.add_listener(Listener::new(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! }))
//! .unwrap();
//!
//! document.dispatch(InteractionKind::PointerDown);
//! document.dispatch(InteractionKind::Scroll);
//!
//! assert_eq!(runs.load(Ordering::SeqCst), 1);
//! ```
//!
//! For a single gate shared by the whole process, see [`facade`].

mod bootstrap;
mod gate;
mod listener;
mod registry;
mod signal;

pub mod config;
pub mod diagnostics;
pub mod facade;
pub mod target;

pub use config::{FailurePolicy, GateConfig};
pub use gate::{DrainReport, GateState, InteractionGate, ListenerFailure, RemovalReport};
pub use listener::Listener;
pub use registry::ListenerRegistry;
pub use signal::{InteractionEvent, InteractionKind};
pub use target::{EventTarget, Headless, Host, LocalDocument, TriggerHandle, Window};

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    /// The first interaction already happened; the call had no effect.
    AlreadyFired,
    /// The listener to remove was never added (or was already removed).
    ListenerNotRegistered,
    /// A signal name that is not one of the recognized interaction events.
    UnknownSignal(String),
}

impl std::error::Error for GateError {}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateError::AlreadyFired => write!(f, "Listeners were already triggered by interaction"),
            GateError::ListenerNotRegistered => write!(f, "Listener was never added"),
            GateError::UnknownSignal(name) => write!(f, "Unknown interaction signal: {}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            GateError::AlreadyFired.to_string(),
            "Listeners were already triggered by interaction"
        );
        assert_eq!(
            GateError::ListenerNotRegistered.to_string(),
            "Listener was never added"
        );
        assert_eq!(
            GateError::UnknownSignal("click".to_owned()).to_string(),
            "Unknown interaction signal: click"
        );
    }
}
