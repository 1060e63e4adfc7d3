//! Conflict errors and the per-session report the validator produces.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::TimeWindow;

/// Message attached to sessions whose end does not follow their start.
pub const TIME_RANGE_MESSAGE: &str = "End time must be after start time";

/// Why a session's timing was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// The session's own end time is not after its start time.
    TimeRange,
    /// The session overlaps another session.
    Conflict,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConflictKind::TimeRange => "time_range",
            ConflictKind::Conflict => "conflict",
        };
        write!(f, "{}", s)
    }
}

/// A validation finding attached to one session.
///
/// This is data for the form to render, not a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictError {
    pub session_index: usize,
    pub kind: ConflictKind,
    /// Zero-based index of the other session, for `Conflict` findings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflicts_with: Option<usize>,
    pub message: String,
}

impl ConflictError {
    /// Finding for a session whose end does not follow its start.
    pub fn time_range(session_index: usize) -> Self {
        Self {
            session_index,
            kind: ConflictKind::TimeRange,
            conflicts_with: None,
            message: TIME_RANGE_MESSAGE.to_string(),
        }
    }

    /// Finding for a session overlapping `other_index`, whose window is `other`.
    ///
    /// Messages number sessions from 1.
    pub fn conflict(session_index: usize, other_index: usize, other: &TimeWindow) -> Self {
        Self {
            session_index,
            kind: ConflictKind::Conflict,
            conflicts_with: Some(other_index),
            message: format!(
                "Time conflicts with Session {} ({})",
                other_index + 1,
                other.display()
            ),
        }
    }

    pub fn is_time_range(&self) -> bool {
        self.kind == ConflictKind::TimeRange
    }

    pub fn is_conflict(&self) -> bool {
        self.kind == ConflictKind::Conflict
    }
}

impl fmt::Display for ConflictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Session {}: {}", self.session_index + 1, self.message)
    }
}

/// Per-session findings, keyed by session index.
///
/// Sessions without an issue have no entry. At most one finding per session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConflictReport {
    errors: BTreeMap<usize, ConflictError>,
}

impl ConflictReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finding, replacing any earlier one for the same session.
    pub fn insert(&mut self, error: ConflictError) {
        self.errors.insert(error.session_index, error);
    }

    /// True when no session carries a finding.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, session_index: usize) -> Option<&ConflictError> {
        self.errors.get(&session_index)
    }

    pub fn contains(&self, session_index: usize) -> bool {
        self.errors.contains_key(&session_index)
    }

    /// Findings in session order.
    pub fn iter(&self) -> impl Iterator<Item = &ConflictError> {
        self.errors.values()
    }

    /// Consumes the report into findings ordered by session index.
    pub fn into_errors(self) -> Vec<ConflictError> {
        self.errors.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;

    fn window() -> TimeWindow {
        TimeWindow::new(
            Timestamp::parse_rfc3339("s", "2024-06-03T09:00:00Z").unwrap(),
            Timestamp::parse_rfc3339("e", "2024-06-03T10:00:00Z").unwrap(),
        )
    }

    #[test]
    fn conflict_message_numbers_sessions_from_one() {
        let err = ConflictError::conflict(1, 0, &window());
        assert_eq!(
            err.message,
            "Time conflicts with Session 1 (2024-06-03 09:00 - 2024-06-03 10:00)"
        );
        assert_eq!(err.conflicts_with, Some(0));
        assert!(err.is_conflict());
    }

    #[test]
    fn time_range_has_fixed_message() {
        let err = ConflictError::time_range(3);
        assert_eq!(err.message, TIME_RANGE_MESSAGE);
        assert_eq!(format!("{}", err), "Session 4: End time must be after start time");
    }

    #[test]
    fn report_keeps_one_finding_per_session() {
        let mut report = ConflictReport::new();
        report.insert(ConflictError::conflict(0, 1, &window()));
        report.insert(ConflictError::time_range(0));

        assert_eq!(report.len(), 1);
        assert!(report.get(0).unwrap().is_time_range());
    }

    #[test]
    fn report_iterates_in_session_order() {
        let mut report = ConflictReport::new();
        report.insert(ConflictError::time_range(2));
        report.insert(ConflictError::time_range(0));

        let order: Vec<usize> = report.iter().map(|e| e.session_index).collect();
        assert_eq!(order, vec![0, 2]);
    }

    #[test]
    fn kind_serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&ConflictKind::TimeRange).unwrap(),
            "\"time_range\""
        );
    }
}
