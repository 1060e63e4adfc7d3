//! SessionConflictValidator - time-range and overlap checks over a session list.

use super::{ConflictError, ConflictReport, SessionSlot, TimeWindow};
use crate::domain::foundation::Timestamp;

/// Session timing validation.
///
/// Stateless: both operations are pure functions of the session list they
/// are given, so calling them twice on the same list yields the same result.
pub struct SessionConflictValidator;

impl SessionConflictValidator {
    /// Validates every session in the list.
    ///
    /// # Algorithm
    /// For each session with both times set:
    /// 1. If its end is not after its start, record a `TimeRange` finding and
    ///    skip overlap checks for it.
    /// 2. Otherwise scan the other time-complete, well-formed sessions in
    ///    list order and record a `Conflict` against the first overlapping one.
    ///
    /// # Edge Cases
    /// - Sessions missing either time are neither checked nor compared against
    /// - Touching sessions (`end == other.start`) do not conflict
    /// - Inverted sessions only carry their own `TimeRange` finding
    /// - Overlap is symmetric, so both sessions of a pair are reported
    pub fn validate_all(sessions: &[SessionSlot]) -> ConflictReport {
        let mut report = ConflictReport::new();

        for (index, session) in sessions.iter().enumerate() {
            let Some(window) = session.window() else {
                continue;
            };

            if !window.is_well_formed() {
                report.insert(ConflictError::time_range(index));
                continue;
            }

            if let Some((other_index, other)) =
                Self::comparable(sessions, index).find(|(_, other)| window.overlaps(other))
            {
                report.insert(ConflictError::conflict(index, other_index, &other));
            }
        }

        report
    }

    /// Checks a not-yet-committed edit to one session.
    ///
    /// `proposed_start` / `proposed_end` override the session's committed
    /// values; `None` keeps the committed value. An `edited_index` past the end
    /// of the list stands for a session that has no committed values yet.
    ///
    /// Only the other sessions' committed times are consulted. Returns the
    /// finding against the lowest-indexed conflicting session, if any.
    ///
    /// # Edge Cases
    /// - Both ends known: same-session range check, then window overlap
    /// - Only the start known: conflict if it falls in `[start, end)` of another
    /// - Only the end known: conflict if it falls in `(start, end]` of another
    /// - Neither known: nothing to check
    pub fn validate_edit(
        sessions: &[SessionSlot],
        edited_index: usize,
        proposed_start: Option<Timestamp>,
        proposed_end: Option<Timestamp>,
    ) -> Option<ConflictError> {
        let committed = sessions.get(edited_index);
        let start = proposed_start.or_else(|| committed.and_then(|s| s.start_time));
        let end = proposed_end.or_else(|| committed.and_then(|s| s.end_time));

        let mut others = Self::comparable(sessions, edited_index);
        let hit = match (start, end) {
            (Some(start), Some(end)) => {
                let window = TimeWindow::new(start, end);
                if !window.is_well_formed() {
                    return Some(ConflictError::time_range(edited_index));
                }
                others.find(|(_, other)| window.overlaps(other))
            }
            (Some(start), None) => others.find(|(_, other)| other.contains_start(start)),
            (None, Some(end)) => others.find(|(_, other)| other.contains_end(end)),
            (None, None) => None,
        };

        hit.map(|(other_index, other)| ConflictError::conflict(edited_index, other_index, &other))
    }

    /// Other sessions that can take part in an overlap, in list order.
    fn comparable(
        sessions: &[SessionSlot],
        skip: usize,
    ) -> impl Iterator<Item = (usize, TimeWindow)> + '_ {
        sessions
            .iter()
            .enumerate()
            .filter(move |(index, _)| *index != skip)
            .filter_map(|(index, session)| {
                session
                    .window()
                    .filter(TimeWindow::is_well_formed)
                    .map(|window| (index, window))
            })
    }
}
