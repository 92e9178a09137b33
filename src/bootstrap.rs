use std::sync::Arc;

use crate::config::GateConfig;
use crate::diagnostics::{Diagnostic, DiagnosticSink, LoggingSink};
use crate::target::Host;
use crate::InteractionGate;

impl InteractionGate {
    /// Creates a gate for `host` with the default configuration, reporting
    /// diagnostics through [`LoggingSink`].
    ///
    /// See [`bootstrap_with`](Self::bootstrap_with).
    pub fn bootstrap<H>(host: &H) -> Arc<Self>
    where
        H: Host + ?Sized,
    {
        Self::bootstrap_with(host, GateConfig::default(), Arc::new(LoggingSink::new()))
    }

    /// Creates a gate for `host`.
    ///
    /// If the host has a document, the gate subscribes to every configured
    /// signal on it and starts out [`Armed`](crate::GateState::Armed).
    /// Otherwise it never subscribes and stays
    /// [`Inert`](crate::GateState::Inert): listeners can still be added and
    /// removed, but nothing will ever run them.
    pub fn bootstrap_with<H>(
        host: &H,
        config: GateConfig,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Arc<Self>
    where
        H: Host + ?Sized,
    {
        let gate = Self::new(host.document(), config, sink);

        match gate.target() {
            Some(target) => {
                for kind in gate.signals() {
                    target.subscribe(*kind, gate.handle().clone());
                }
                gate.emit(Diagnostic::Armed {
                    signals: gate.signals().to_vec(),
                });
            }
            None => gate.emit(Diagnostic::Inert),
        }

        gate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;
    use crate::{GateState, Headless, InteractionKind, LocalDocument, Window};

    #[test]
    fn test_bootstrap_subscribes_every_signal() {
        let document = Arc::new(LocalDocument::new());
        let gate = InteractionGate::bootstrap(&Window::new(document.clone()));

        assert_eq!(gate.state(), GateState::Armed);
        for kind in InteractionKind::ALL {
            assert_eq!(document.subscriber_count(kind), 1);
        }
    }

    #[test]
    fn test_bootstrap_headless_is_inert() {
        let sink = MemorySink::new();
        let gate =
            InteractionGate::bootstrap_with(&Headless, GateConfig::default(), Arc::new(sink.clone()));

        assert_eq!(gate.state(), GateState::Inert);
        assert_eq!(sink.recorded(), vec![Diagnostic::Inert]);
    }

    #[test]
    fn test_bootstrap_respects_configured_signals() {
        let document = Arc::new(LocalDocument::new());
        let sink = MemorySink::new();
        let config = GateConfig::default().with_signals([
            InteractionKind::KeyDown,
            InteractionKind::KeyDown,
            InteractionKind::Scroll,
        ]);

        let gate = InteractionGate::bootstrap_with(
            &Window::new(document.clone()),
            config,
            Arc::new(sink.clone()),
        );

        assert_eq!(
            gate.signals(),
            &[InteractionKind::KeyDown, InteractionKind::Scroll]
        );
        assert_eq!(document.subscriber_count(InteractionKind::KeyDown), 1);
        assert_eq!(document.subscriber_count(InteractionKind::PointerDown), 0);
        assert_eq!(
            sink.recorded(),
            vec![Diagnostic::Armed {
                signals: vec![InteractionKind::KeyDown, InteractionKind::Scroll]
            }]
        );
    }

    #[test]
    fn test_bootstrap_without_signals_is_inert() {
        let document = Arc::new(LocalDocument::new());
        let sink = MemorySink::new();
        let gate = InteractionGate::bootstrap_with(
            &Window::new(document.clone()),
            GateConfig::default().with_signals(Vec::<InteractionKind>::new()),
            Arc::new(sink.clone()),
        );

        assert_eq!(gate.state(), GateState::Inert);
        assert!(gate.signals().is_empty());
        assert_eq!(sink.recorded(), vec![Diagnostic::Inert]);
        for kind in InteractionKind::ALL {
            assert_eq!(document.subscriber_count(kind), 0);
            assert_eq!(document.dispatch(kind), 0);
        }
        assert!(!gate.is_fired());
    }

    #[test]
    fn test_dropping_unfired_gate_unsubscribes() {
        let document = Arc::new(LocalDocument::new());
        let gate = InteractionGate::bootstrap(&Window::new(document.clone()));
        drop(gate);

        for kind in InteractionKind::ALL {
            assert_eq!(document.subscriber_count(kind), 0);
        }
    }
}
