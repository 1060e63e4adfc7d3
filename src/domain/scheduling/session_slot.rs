//! SessionSlot - one sub-block of an event as it is being edited.

use serde::{Deserialize, Serialize};

use super::TimeWindow;
use crate::domain::foundation::Timestamp;

/// A proposed event session.
///
/// Its index is its position in the owning list and is only stable while
/// the list is being edited. Times stay `None` until the organizer picks
/// them; such sessions are not comparable and never conflict.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSlot {
    pub title: String,
    pub description: String,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    pub location: String,
    pub max_attendees: u32,
    /// Set once the organizer confirms the session; saved sessions are read-only.
    pub saved: bool,
}

impl SessionSlot {
    /// A blank session, as seeded into a new event form.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a copy carrying the given times.
    pub fn with_times(mut self, start: Timestamp, end: Timestamp) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    /// The session's window, when both ends are known.
    pub fn window(&self) -> Option<TimeWindow> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(TimeWindow::new(start, end)),
            _ => None,
        }
    }

    /// True when both start and end are set.
    pub fn is_time_complete(&self) -> bool {
        self.window().is_some()
    }
}
