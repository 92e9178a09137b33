use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::GateError;

/// An input signal that counts as a user interaction.
///
/// Serialized and displayed as the DOM event name it corresponds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionKind {
    #[serde(rename = "mousedown")]
    PointerDown,
    #[serde(rename = "mousemove")]
    PointerMove,
    #[serde(rename = "touchstart")]
    TouchStart,
    #[serde(rename = "scroll")]
    Scroll,
    #[serde(rename = "keydown")]
    KeyDown,
}

impl InteractionKind {
    /// Every interaction kind, in subscription order.
    pub const ALL: [InteractionKind; 5] = [
        Self::PointerDown,
        Self::PointerMove,
        Self::TouchStart,
        Self::Scroll,
        Self::KeyDown,
    ];

    /// Returns the DOM event name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PointerDown => "mousedown",
            Self::PointerMove => "mousemove",
            Self::TouchStart => "touchstart",
            Self::Scroll => "scroll",
            Self::KeyDown => "keydown",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InteractionKind {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| GateError::UnknownSignal(s.to_owned()))
    }
}

/// A delivered interaction signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionEvent {
    pub kind: InteractionKind,
    pub at: DateTime<Utc>,
}

impl InteractionEvent {
    pub fn new(kind: InteractionKind, at: DateTime<Utc>) -> Self {
        Self { kind, at }
    }

    /// Creates an event of the given kind stamped with the current time.
    pub fn now(kind: InteractionKind) -> Self {
        Self::new(kind, Utc::now())
    }
}
