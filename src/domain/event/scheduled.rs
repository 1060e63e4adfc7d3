//! ScheduledEvent - an event whose sessions passed validation and were saved.

use serde::{Deserialize, Serialize};

use super::EventMode;
use crate::domain::foundation::{EventId, Timestamp};
use crate::domain::scheduling::TimeWindow;

/// A session with concrete, conflict-free timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledSession {
    pub title: String,
    pub description: String,
    pub window: TimeWindow,
    /// Empty for virtual events.
    pub location: String,
    pub max_attendees: u32,
}

/// An accepted event, ready for the data store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub mode: EventMode,
    /// Venue address, or the meeting link for virtual events.
    pub location: String,
    /// In the order the organizer listed them.
    pub sessions: Vec<ScheduledSession>,
    pub created_at: Timestamp,
}

impl ScheduledEvent {
    /// Earliest session start.
    pub fn starts_at(&self) -> Option<Timestamp> {
        self.sessions.iter().map(|s| s.window.start()).min()
    }

    /// Latest session end.
    pub fn ends_at(&self) -> Option<Timestamp> {
        self.sessions.iter().map(|s| s.window.end()).max()
    }

    /// Total seats across all sessions.
    pub fn total_capacity(&self) -> u64 {
        self.sessions.iter().map(|s| u64::from(s.max_attendees)).sum()
    }
}
