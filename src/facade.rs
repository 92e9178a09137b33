//! The process-wide gate.
//!
//! Most pages need a single gate. Call [`install`] once at startup with the
//! page's host, then register listeners from anywhere with the free
//! functions in this module. If nothing installs a gate before the first
//! call, an inert one is created: listeners can be added and removed, but
//! nothing will ever run them, just as on a server-side render.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use first_interaction::{facade, Listener, Window};
//!
//! fn main() {
//!     facade::install(&Window::new(document));
//!
//!     facade::add_listener(Listener::new(|| start_audio()));
//! }
//! ```

use std::sync::{Arc, OnceLock};

use crate::config::GateConfig;
use crate::diagnostics::{DiagnosticSink, LoggingSink};
use crate::target::{Headless, Host};
use crate::{InteractionGate, Listener};

static GATE: OnceLock<Arc<InteractionGate>> = OnceLock::new();

/// Installs the process-wide gate for `host` with the default
/// configuration.
///
/// See [`install_with`].
pub fn install<H>(host: &H) -> Arc<InteractionGate>
where
    H: Host + ?Sized,
{
    install_with(host, GateConfig::default(), Arc::new(LoggingSink::new()))
}

/// Installs the process-wide gate for `host`.
///
/// Only the first call takes effect. Later calls, or a call made after the
/// free functions already created an inert gate, log a warning and return
/// the gate that is already installed.
pub fn install_with<H>(
    host: &H,
    config: GateConfig,
    sink: Arc<dyn DiagnosticSink>,
) -> Arc<InteractionGate>
where
    H: Host + ?Sized,
{
    let mut installed = false;
    let gate = GATE.get_or_init(|| {
        installed = true;
        InteractionGate::bootstrap_with(host, config, sink)
    });

    if !installed {
        log::warn!(
            target: "first_interaction",
            "install called after the gate was already set up, ignoring"
        );
    }

    gate.clone()
}

/// Returns the process-wide gate, creating an inert one if none was
/// installed.
pub fn gate() -> &'static Arc<InteractionGate> {
    GATE.get_or_init(|| InteractionGate::bootstrap(&Headless))
}

/// Adds a listener to run on the first interaction.
///
/// Has no effect, apart from a warning, once the first interaction has
/// happened.
pub fn add_listener(listener: Listener) {
    let _ = gate().add_listener(listener);
}

/// Adds several listeners to run on the first interaction, in order.
pub fn add_listeners<I>(listeners: I)
where
    I: IntoIterator<Item = Listener>,
{
    let _ = gate().add_listeners(listeners);
}

/// Removes one registration of a listener.
///
/// Warns if the listener was never added, or if the first interaction has
/// already happened.
pub fn remove_listener(listener: &Listener) {
    let _ = gate().remove_listener(listener);
}

/// Removes one registration of each listener. Listeners that were never
/// added are warned about and skipped.
pub fn remove_listeners(listeners: &[Listener]) {
    let _ = gate().remove_listeners(listeners);
}
