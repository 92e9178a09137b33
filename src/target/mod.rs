//! The page environment a gate attaches to.
//!
//! A gate needs two things from its host: a way to tell whether a page
//! exists at all ([`Host`]), and a document-level [`EventTarget`] to
//! subscribe to. Browser bindings implement these over `window` and
//! `document`. [`LocalDocument`] is an in-process target for native event
//! loops and tests.

mod document;
mod host;

use std::fmt;
use std::sync::{Arc, Weak};

pub use document::LocalDocument;
pub use host::{Headless, Window};

use crate::gate::DrainReport;
use crate::{InteractionEvent, InteractionGate, InteractionKind};

/// A document-level event target.
///
/// Mirrors `addEventListener` / `removeEventListener`: subscribing the
/// same handle to the same kind twice has no effect, and unsubscribing a
/// handle that is not subscribed does nothing.
pub trait EventTarget: Send + Sync {
    fn subscribe(&self, kind: InteractionKind, handle: TriggerHandle);

    fn unsubscribe(&self, kind: InteractionKind, handle: &TriggerHandle);
}

/// The hosting environment.
pub trait Host {
    /// Returns the page's document, or `None` when no page is rendered
    /// (server-side or any other non-browser context).
    fn document(&self) -> Option<Arc<dyn EventTarget>>;
}

/// The callback a gate subscribes to its event target.
///
/// Holds only a weak reference to its gate, so a target never keeps a
/// gate alive. Two handles are equal when they belong to the same gate.
#[derive(Clone)]
pub struct TriggerHandle {
    gate: Weak<InteractionGate>,
}

impl TriggerHandle {
    pub(crate) fn new(gate: Weak<InteractionGate>) -> Self {
        Self { gate }
    }

    /// Delivers an interaction to the gate.
    ///
    /// Returns the drain report for the delivery that fired the gate, and
    /// `None` for every other delivery or once the gate has been dropped.
    pub fn handle_event(&self, event: &InteractionEvent) -> Option<DrainReport> {
        self.gate.upgrade()?.trigger(event)
    }
}

impl PartialEq for TriggerHandle {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.gate, &other.gate)
    }
}

impl Eq for TriggerHandle {}

impl fmt::Debug for TriggerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TriggerHandle({:p})", self.gate.as_ptr())
    }
}
