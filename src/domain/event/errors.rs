//! Event-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, EventId, ValidationError};
use crate::domain::scheduling::ConflictReport;

/// Event-specific errors.
///
/// Session indices are zero-based; messages number sessions from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// Event was not found.
    NotFound(EventId),
    /// No session at this index.
    SessionNotFound(usize),
    /// Session is saved and read-only.
    SessionLocked(usize),
    /// Adding another session would exceed the configured limit.
    SessionLimitReached(usize),
    /// The only remaining session cannot be removed.
    LastSession,
    /// One or more sessions carry timing findings.
    SessionConflicts(ConflictReport),
    /// These sessions have not been saved yet.
    UnsavedSessions(Vec<usize>),
    /// A field failed validation.
    Validation(ValidationError),
    /// Infrastructure error.
    Infrastructure(String),
}

impl EventError {
    pub fn not_found(id: EventId) -> Self {
        EventError::NotFound(id)
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        EventError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            EventError::NotFound(_) => ErrorCode::EventNotFound,
            EventError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            EventError::SessionLocked(_) => ErrorCode::SessionLocked,
            EventError::SessionLimitReached(_) => ErrorCode::SessionLimitReached,
            EventError::LastSession => ErrorCode::LastSessionRequired,
            EventError::SessionConflicts(_) => ErrorCode::SessionConflict,
            EventError::UnsavedSessions(_) => ErrorCode::SessionsUnsaved,
            EventError::Validation(_) => ErrorCode::ValidationFailed,
            EventError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            EventError::NotFound(id) => format!("Event not found: {}", id),
            EventError::SessionNotFound(index) => {
                format!("Session {} does not exist", index + 1)
            }
            EventError::SessionLocked(index) => {
                format!("Session {} is saved and can no longer be edited", index + 1)
            }
            EventError::SessionLimitReached(max) => {
                format!("An event cannot have more than {} sessions", max)
            }
            EventError::LastSession => "An event needs at least one session".to_string(),
            EventError::SessionConflicts(report) => {
                format!("{} session(s) have timing problems", report.len())
            }
            EventError::UnsavedSessions(indices) => {
                let numbers: Vec<String> = indices.iter().map(|i| (i + 1).to_string()).collect();
                format!("Save all sessions before submitting (unsaved: {})", numbers.join(", "))
            }
            EventError::Validation(err) => err.to_string(),
            EventError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for EventError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for EventError {}

impl From<ValidationError> for EventError {
    fn from(err: ValidationError) -> Self {
        EventError::Validation(err)
    }
}

impl From<DomainError> for EventError {
    fn from(err: DomainError) -> Self {
        EventError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_number_sessions_from_one() {
        assert_eq!(
            EventError::SessionLocked(0).message(),
            "Session 1 is saved and can no longer be edited"
        );
        assert_eq!(
            EventError::UnsavedSessions(vec![0, 2]).message(),
            "Save all sessions before submitting (unsaved: 1, 3)"
        );
    }

    #[test]
    fn codes_map_by_variant() {
        assert_eq!(
            EventError::SessionConflicts(ConflictReport::new()).code(),
            ErrorCode::SessionConflict
        );
        assert_eq!(EventError::not_found(EventId::new()).code(), ErrorCode::EventNotFound);
        assert_eq!(
            EventError::from(ValidationError::empty_field("title")).code(),
            ErrorCode::ValidationFailed
        );
    }

    #[test]
    fn domain_error_becomes_infrastructure() {
        let err: EventError = DomainError::new(ErrorCode::DatabaseError, "disk full").into();
        assert_eq!(err.message(), "Error: [DATABASE_ERROR] disk full");
    }
}
