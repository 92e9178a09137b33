//! Process-wide gate used without a page.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use first_interaction::{facade, GateState, InteractionKind, Listener, LocalDocument, Window};

#[test]
fn test_uninstalled_gate_is_an_inert_registry() {
    let listener = Listener::new(|| panic!("must never run"));

    facade::add_listener(listener.clone());
    facade::add_listener(listener.clone());
    assert_eq!(facade::gate().state(), GateState::Inert);
    assert_eq!(facade::gate().pending(), 2);

    facade::remove_listener(&listener);
    assert_eq!(facade::gate().pending(), 1);

    // installing after first use cannot arm the gate
    let document = Arc::new(LocalDocument::new());
    let gate = facade::install(&Window::new(document.clone()));
    assert_eq!(gate.state(), GateState::Inert);
    assert_eq!(document.dispatch(InteractionKind::PointerDown), 0);
    assert_eq!(facade::gate().pending(), 1);
}
