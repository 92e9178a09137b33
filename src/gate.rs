use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use crate::config::{FailurePolicy, GateConfig};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::target::{EventTarget, TriggerHandle};
use crate::{GateError, InteractionEvent, InteractionKind, Listener, ListenerRegistry};

/// Where a gate is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// No page was found, or no signals were configured; the gate never
    /// subscribed and will never fire.
    Inert,
    /// Subscribed and waiting for the first interaction.
    Armed,
    /// The first interaction happened. Terminal.
    Fired,
}

/// A listener that panicked during the drain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerFailure {
    /// Position of the listener in the drain, counting from zero.
    pub position: usize,
    pub message: String,
}

/// Outcome of the single drain a gate performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrainReport {
    /// The signal that fired the gate.
    pub signal: InteractionKind,
    /// Listeners that ran to completion.
    pub invoked: usize,
    pub failures: Vec<ListenerFailure>,
}

/// Outcome of a batch removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalReport {
    pub removed: usize,
    /// Positions, within the batch, of listeners that were not registered.
    pub missing_positions: Vec<usize>,
}

impl RemovalReport {
    pub fn is_complete(&self) -> bool {
        self.missing_positions.is_empty()
    }
}

/// One-shot gate that runs every registered listener on the first
/// interaction, then shuts itself off.
///
/// Create one with [`InteractionGate::bootstrap`]. Listeners added before
/// the first interaction run exactly once, in the order they were added.
/// After that the gate unsubscribes from its document, empties its
/// registry, and ignores every further add or remove with a warning.
///
/// The gate is safe to share between threads. The fired flag is flipped
/// with a single compare-and-swap, so at most one delivery ever drains,
/// and no lock is held while listeners or sinks run.
pub struct InteractionGate {
    registry: Mutex<ListenerRegistry>,
    fired: AtomicBool,
    fired_by: OnceLock<InteractionEvent>,
    target: Option<Arc<dyn EventTarget>>,
    signals: Vec<InteractionKind>,
    handle: TriggerHandle,
    failure_policy: FailurePolicy,
    sink: Arc<dyn DiagnosticSink>,
}

impl InteractionGate {
    pub(crate) fn new(
        target: Option<Arc<dyn EventTarget>>,
        config: GateConfig,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Arc<Self> {
        let signals = match target {
            Some(_) => config.unique_signals(),
            None => Vec::new(),
        };
        // nothing to subscribe to means nothing can ever fire
        let target = target.filter(|_| !signals.is_empty());

        Arc::new_cyclic(|weak| Self {
            registry: Mutex::new(ListenerRegistry::new()),
            fired: AtomicBool::new(false),
            fired_by: OnceLock::new(),
            target,
            signals,
            handle: TriggerHandle::new(weak.clone()),
            failure_policy: config.failure_policy,
            sink,
        })
    }

    pub fn state(&self) -> GateState {
        if self.is_fired() {
            GateState::Fired
        } else if self.target.is_some() {
            GateState::Armed
        } else {
            GateState::Inert
        }
    }

    pub fn is_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }

    /// Returns the event that fired the gate, if it has fired.
    pub fn fired_by(&self) -> Option<&InteractionEvent> {
        self.fired_by.get()
    }

    /// Returns how many listeners are waiting to run.
    pub fn pending(&self) -> usize {
        self.lock_registry().len()
    }

    /// Returns the signals this gate is (or was) subscribed to. Empty for
    /// an inert gate.
    pub fn signals(&self) -> &[InteractionKind] {
        &self.signals
    }

    pub(crate) fn handle(&self) -> &TriggerHandle {
        &self.handle
    }

    pub(crate) fn target(&self) -> Option<&Arc<dyn EventTarget>> {
        self.target.as_ref()
    }

    pub(crate) fn emit(&self, diagnostic: Diagnostic) {
        self.sink.emit(&diagnostic);
    }

    /// Registers a listener to run on the first interaction.
    ///
    /// After the gate has fired this does nothing, reports a
    /// [`Diagnostic::LateAdd`] and returns [`GateError::AlreadyFired`].
    pub fn add_listener(&self, listener: Listener) -> Result<(), GateError> {
        self.add_listeners([listener])
    }

    /// Registers several listeners, keeping their order.
    pub fn add_listeners<I>(&self, listeners: I) -> Result<(), GateError>
    where
        I: IntoIterator<Item = Listener>,
    {
        let listeners: Vec<Listener> = listeners.into_iter().collect();
        {
            let mut registry = self.lock_registry();
            if !self.is_fired() {
                registry.extend(listeners);
                return Ok(());
            }
        }

        self.emit(Diagnostic::LateAdd);
        Err(GateError::AlreadyFired)
    }

    /// Removes the first registration of `listener`.
    ///
    /// Returns [`GateError::ListenerNotRegistered`] if it was never added,
    /// and [`GateError::AlreadyFired`] after the gate has fired. Both cases
    /// are also reported to the diagnostic sink.
    pub fn remove_listener(&self, listener: &Listener) -> Result<(), GateError> {
        let report = self.remove_listeners(std::slice::from_ref(listener))?;
        if report.is_complete() {
            Ok(())
        } else {
            Err(GateError::ListenerNotRegistered)
        }
    }

    /// Removes the first registration of each listener in `listeners`.
    ///
    /// A listener that is not registered is reported and skipped; the rest
    /// of the batch is still removed.
    pub fn remove_listeners(&self, listeners: &[Listener]) -> Result<RemovalReport, GateError> {
        let mut report = RemovalReport::default();
        {
            let mut registry = self.lock_registry();
            if self.is_fired() {
                drop(registry);
                self.emit(Diagnostic::LateRemove);
                return Err(GateError::AlreadyFired);
            }

            for (position, listener) in listeners.iter().enumerate() {
                if registry.remove_first(listener) {
                    report.removed += 1;
                } else {
                    report.missing_positions.push(position);
                }
            }
        }

        for position in &report.missing_positions {
            self.emit(Diagnostic::MissingListener {
                position: *position,
            });
        }

        Ok(report)
    }

    /// Runs the drain for the first delivered interaction.
    ///
    /// Every later call returns `None` without touching anything.
    pub(crate) fn trigger(&self, event: &InteractionEvent) -> Option<DrainReport> {
        if self
            .fired
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return None;
        }

        let _ = self.fired_by.set(event.clone());

        // adds and removes check the flag under this lock, so nothing can
        // land in the registry after this point
        let pending = self.lock_registry().drain();

        self.emit(Diagnostic::Fired {
            signal: event.kind,
            pending: pending.len(),
            at: event.at,
        });

        let mut report = DrainReport {
            signal: event.kind,
            invoked: 0,
            failures: Vec::new(),
        };
        let mut unwinding = None;

        for (position, listener) in pending.iter().enumerate() {
            match panic::catch_unwind(AssertUnwindSafe(|| listener.call())) {
                Ok(()) => report.invoked += 1,
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    self.emit(Diagnostic::ListenerFailed {
                        position,
                        message: message.clone(),
                    });
                    report.failures.push(ListenerFailure { position, message });

                    if self.failure_policy == FailurePolicy::Propagate {
                        unwinding = Some(payload);
                        break;
                    }
                }
            }
        }

        self.unsubscribe_all();
        drop(pending);

        self.emit(Diagnostic::Drained {
            invoked: report.invoked,
            failed: report.failures.len(),
        });

        if let Some(payload) = unwinding {
            panic::resume_unwind(payload);
        }

        Some(report)
    }

    fn unsubscribe_all(&self) {
        if let Some(target) = &self.target {
            for kind in &self.signals {
                target.unsubscribe(*kind, &self.handle);
            }
        }
    }

    fn lock_registry(&self) -> MutexGuard<'_, ListenerRegistry> {
        self.registry
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for InteractionGate {
    fn drop(&mut self) {
        if !self.is_fired() {
            self.unsubscribe_all();
        }
    }
}

impl std::fmt::Debug for InteractionGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionGate")
            .field("state", &self.state())
            .field("pending", &self.pending())
            .field("signals", &self.signals)
            .field("failure_policy", &self.failure_policy)
            .finish_non_exhaustive()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}
