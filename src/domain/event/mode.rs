//! EventMode enum - where an event takes place.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the event is held at a venue or online.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EventMode {
    #[default]
    InPerson,
    Virtual,
}

impl EventMode {
    /// Virtual sessions take their location from the event, never their own.
    pub fn is_virtual(&self) -> bool {
        matches!(self, EventMode::Virtual)
    }
}

impl fmt::Display for EventMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventMode::InPerson => "In person",
            EventMode::Virtual => "Virtual",
        };
        write!(f, "{}", s)
    }
}
