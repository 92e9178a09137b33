//! Configuration for an interaction gate.
//!
//! # Example
//!
//! ```rust
//! use first_interaction::config::{FailurePolicy, GateConfig};
//! use first_interaction::InteractionKind;
//!
//! // Use defaults: all five signals, isolate panicking listeners
//! let config = GateConfig::default();
//!
//! // Or customize
//! let config = GateConfig::default()
//!     .with_signals([InteractionKind::PointerDown, InteractionKind::KeyDown])
//!     .with_failure_policy(FailurePolicy::Propagate);
//! ```

use serde::{Deserialize, Serialize};

use crate::InteractionKind;

/// What the drain does when a listener panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Record the panic, report it, and keep running the remaining listeners.
    #[default]
    Isolate,
    /// Stop the drain at the first panic and resume unwinding once the
    /// gate has unsubscribed and cleared its registry.
    Propagate,
}

/// Settings for an [`InteractionGate`](crate::InteractionGate).
///
/// Use `GateConfig::default()` for the standard five signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Signals that count as the first interaction.
    ///
    /// Default: every [`InteractionKind`]. Duplicates are subscribed once.
    /// An empty list subscribes to nothing, so the gate starts out
    /// [`Inert`](crate::GateState::Inert).
    pub signals: Vec<InteractionKind>,

    /// How a panicking listener affects the rest of the drain.
    ///
    /// Default: [`FailurePolicy::Isolate`]
    pub failure_policy: FailurePolicy,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            signals: InteractionKind::ALL.to_vec(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl GateConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration where a panicking listener aborts the drain.
    pub fn propagating() -> Self {
        Self {
            failure_policy: FailurePolicy::Propagate,
            ..Self::default()
        }
    }

    pub fn with_signals<I>(mut self, signals: I) -> Self
    where
        I: IntoIterator<Item = InteractionKind>,
    {
        self.signals = signals.into_iter().collect();
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Returns the configured signals with duplicates removed, first
    /// occurrence wins.
    pub fn unique_signals(&self) -> Vec<InteractionKind> {
        let mut unique = Vec::with_capacity(self.signals.len());
        for kind in &self.signals {
            if !unique.contains(kind) {
                unique.push(*kind);
            }
        }
        unique
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_default_config() {
        let config = GateConfig::default();
        assert_eq!(config.signals, InteractionKind::ALL.to_vec());
        assert_eq!(config.failure_policy, FailurePolicy::Isolate);
    }

    #[test]
    fn test_propagating_config() {
        let config = GateConfig::propagating();
        assert_eq!(config.failure_policy, FailurePolicy::Propagate);
        assert_eq!(config.signals.len(), 5);
    }

    #[test]
    fn test_unique_signals() {
        let config = GateConfig::new().with_signals([
            InteractionKind::Scroll,
            InteractionKind::KeyDown,
            InteractionKind::Scroll,
        ]);

        assert_eq!(
            config.unique_signals(),
            vec![InteractionKind::Scroll, InteractionKind::KeyDown]
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: GateConfig =
            serde_json::from_str(r#"{ "failure_policy": "propagate" }"#).unwrap();

        assert_eq!(config.failure_policy, FailurePolicy::Propagate);
        assert_eq!(config.signals, InteractionKind::ALL.to_vec());
    }

    #[test]
    fn test_deserialize_signals() {
        let config: GateConfig =
            serde_json::from_str(r#"{ "signals": ["mousedown", "scroll"] }"#).unwrap();

        assert_eq!(
            config.signals,
            vec![InteractionKind::PointerDown, InteractionKind::Scroll]
        );
        assert_eq!(config.failure_policy, FailurePolicy::Isolate);
    }
}
