//! Process-wide gate installed on a page.
//!
//! The global gate can only be installed once per process, so the whole
//! lifecycle runs as a single test in its own binary.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use first_interaction::{facade, GateState, InteractionKind, Listener, LocalDocument, Window};

fn counted() -> (Listener, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = count.clone();
    let listener = Listener::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (listener, count)
}

#[test]
fn test_global_gate_lifecycle() {
    let document = Arc::new(LocalDocument::new());
    let gate = facade::install(&Window::new(document.clone()));
    assert_eq!(gate.state(), GateState::Armed);
    assert!(Arc::ptr_eq(&gate, facade::gate()));

    // a second install is ignored and returns the original gate
    let other = Arc::new(LocalDocument::new());
    let again = facade::install(&Window::new(other.clone()));
    assert!(Arc::ptr_eq(&gate, &again));
    assert_eq!(other.subscriber_count(InteractionKind::Scroll), 0);

    let (l1, c1) = counted();
    let (l2, c2) = counted();
    let (l3, c3) = counted();
    facade::add_listener(l1.clone());
    facade::add_listeners([l2.clone(), l3.clone()]);
    facade::remove_listener(&l3);
    facade::remove_listeners(&[l1.clone(), Listener::new(|| {})]);
    assert_eq!(facade::gate().pending(), 1);

    document.dispatch(InteractionKind::TouchStart);
    assert_eq!(c1.load(Ordering::SeqCst), 0);
    assert_eq!(c2.load(Ordering::SeqCst), 1);
    assert_eq!(c3.load(Ordering::SeqCst), 0);

    // late calls are ignored and never panic
    let (late, late_count) = counted();
    facade::add_listener(late.clone());
    facade::remove_listener(&l2);
    document.dispatch(InteractionKind::PointerDown);

    assert_eq!(late_count.load(Ordering::SeqCst), 0);
    assert_eq!(c2.load(Ordering::SeqCst), 1);
    assert_eq!(facade::gate().state(), GateState::Fired);
    assert_eq!(facade::gate().pending(), 0);
}
