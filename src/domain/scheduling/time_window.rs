//! TimeWindow value object - the half-open interval a session occupies.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// A `[start, end)` interval.
///
/// Construction does not reject inverted windows: the validator has to see
/// them in order to report them, so well-formedness is a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    start: Timestamp,
    end: Timestamp,
}

impl TimeWindow {
    /// Creates a window from its two ends.
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Returns the start instant.
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// Returns the end instant.
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// True when the end follows the start.
    pub fn is_well_formed(&self) -> bool {
        self.end.is_after(&self.start)
    }

    /// Length in whole minutes (negative for inverted windows).
    pub fn duration_minutes(&self) -> i64 {
        self.end.duration_since(&self.start).num_minutes()
    }

    /// Tests whether `instant`, used as a start, lands inside `[start, end)`.
    pub fn contains_start(&self, instant: Timestamp) -> bool {
        instant >= self.start && instant < self.end
    }

    /// Tests whether `instant`, used as an end, lands inside `(start, end]`.
    pub fn contains_end(&self, instant: Timestamp) -> bool {
        instant > self.start && instant <= self.end
    }

    /// Tests whether this window fully covers `other`, bounds included.
    pub fn encloses(&self, other: &TimeWindow) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// Overlap test between two windows.
    ///
    /// Evaluates four clauses: general intersection, this start inside
    /// `other`, this end inside `other`, and full containment of `other`.
    /// For well-formed windows the last three each imply the first, so the
    /// result equals `self.start < other.end && self.end > other.start`.
    /// Windows that only touch (`self.end == other.start`) never overlap.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        let intersects = self.start < other.end && self.end > other.start;
        intersects
            || other.contains_start(self.start)
            || other.contains_end(self.end)
            || self.encloses(other)
    }

    /// Renders the window for user-facing messages.
    pub fn display(&self) -> String {
        format!("{} - {}", self.start.display(), self.end.display())
    }
}
