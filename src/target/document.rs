use std::sync::{Mutex, MutexGuard};

use super::{EventTarget, TriggerHandle};
use crate::{InteractionEvent, InteractionKind};

/// An in-process document that delivers interaction events to the
/// handles subscribed to it.
///
/// Handles are invoked in subscription order. Dispatch works on a snapshot
/// taken before the first handle runs, so handles may subscribe or
/// unsubscribe from inside a dispatch.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use first_interaction::{InteractionGate, InteractionKind, Listener, LocalDocument, Window};
///
/// let document = Arc::new(LocalDocument::new());
/// let gate = InteractionGate::bootstrap(&Window::new(document.clone()));
///
/// gate.add_listener(Listener::new(|| println!("first interaction"))).unwrap();
///
/// document.dispatch(InteractionKind::KeyDown);
/// assert!(gate.is_fired());
/// ```
#[derive(Debug, Default)]
pub struct LocalDocument {
    handlers: Mutex<Vec<(InteractionKind, TriggerHandle)>>,
}

impl LocalDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatches an event of the given kind stamped with the current time.
    ///
    /// Returns how many handles were invoked.
    pub fn dispatch(&self, kind: InteractionKind) -> usize {
        self.dispatch_event(&InteractionEvent::now(kind))
    }

    /// Dispatches `event` to every handle subscribed to its kind.
    ///
    /// Returns how many handles were invoked.
    pub fn dispatch_event(&self, event: &InteractionEvent) -> usize {
        let snapshot: Vec<TriggerHandle> = self
            .lock()
            .iter()
            .filter(|(kind, _)| *kind == event.kind)
            .map(|(_, handle)| handle.clone())
            .collect();

        for handle in &snapshot {
            handle.handle_event(event);
        }

        snapshot.len()
    }

    /// Returns how many handles are subscribed to `kind`.
    pub fn subscriber_count(&self, kind: InteractionKind) -> usize {
        self.lock().iter().filter(|(k, _)| *k == kind).count()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(InteractionKind, TriggerHandle)>> {
        self.handlers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EventTarget for LocalDocument {
    fn subscribe(&self, kind: InteractionKind, handle: TriggerHandle) {
        let mut handlers = self.lock();
        if !handlers.iter().any(|(k, h)| *k == kind && *h == handle) {
            handlers.push((kind, handle));
        }
    }

    fn unsubscribe(&self, kind: InteractionKind, handle: &TriggerHandle) {
        self.lock().retain(|(k, h)| !(*k == kind && h == handle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InteractionGate;
    use std::sync::Arc;

    fn detached_handle() -> TriggerHandle {
        TriggerHandle::new(std::sync::Weak::<InteractionGate>::new())
    }

    #[test]
    fn test_subscribe_is_idempotent_per_kind() {
        let document = LocalDocument::new();
        let handle = detached_handle();

        document.subscribe(InteractionKind::Scroll, handle.clone());
        document.subscribe(InteractionKind::Scroll, handle.clone());
        document.subscribe(InteractionKind::KeyDown, handle);

        assert_eq!(document.subscriber_count(InteractionKind::Scroll), 1);
        assert_eq!(document.subscriber_count(InteractionKind::KeyDown), 1);
    }

    #[test]
    fn test_unsubscribe_only_affects_given_kind() {
        let document = LocalDocument::new();
        let handle = detached_handle();

        document.subscribe(InteractionKind::Scroll, handle.clone());
        document.subscribe(InteractionKind::KeyDown, handle.clone());
        document.unsubscribe(InteractionKind::Scroll, &handle);

        assert_eq!(document.subscriber_count(InteractionKind::Scroll), 0);
        assert_eq!(document.subscriber_count(InteractionKind::KeyDown), 1);
    }

    #[test]
    fn test_dispatch_counts_matching_handles() {
        let document = LocalDocument::new();
        document.subscribe(InteractionKind::TouchStart, detached_handle());

        assert_eq!(document.dispatch(InteractionKind::TouchStart), 1);
        assert_eq!(document.dispatch(InteractionKind::PointerMove), 0);
    }

    #[test]
    fn test_dispatch_to_dropped_gate_is_harmless() {
        let document = LocalDocument::new();
        let handle = {
            let gate = InteractionGate::bootstrap(&crate::Headless);
            gate.handle().clone()
        };
        document.subscribe(InteractionKind::PointerDown, handle.clone());

        assert!(handle
            .handle_event(&InteractionEvent::now(InteractionKind::PointerDown))
            .is_none());
        assert_eq!(document.dispatch(InteractionKind::PointerDown), 1);
    }

    #[test]
    fn test_dispatch_fires_gate_once() {
        let document = Arc::new(LocalDocument::new());
        let gate = InteractionGate::bootstrap(&crate::Window::new(document.clone()));

        assert_eq!(document.dispatch(InteractionKind::Scroll), 1);
        assert!(gate.is_fired());
        assert_eq!(document.dispatch(InteractionKind::Scroll), 0);
    }
}
