//! HTTP DTOs for event endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::event::{EventMode, ScheduledEvent, ScheduledSession};
use crate::domain::foundation::Timestamp;
use crate::domain::scheduling::{ConflictError, ConflictKind, SessionSlot};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One session as submitted by the event form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionRequest {
    pub title: String,
    pub description: String,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    pub location: String,
    pub max_attendees: u32,
}

impl From<SessionRequest> for SessionSlot {
    fn from(req: SessionRequest) -> Self {
        SessionSlot {
            title: req.title,
            description: req.description,
            start_time: req.start_time,
            end_time: req.end_time,
            location: req.location,
            max_attendees: req.max_attendees,
            saved: false,
        }
    }
}

/// Request to validate a full session list.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateSessionsRequest {
    pub sessions: Vec<SessionRequest>,
}

/// Request to check a single pending time edit.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateEditRequest {
    pub sessions: Vec<SessionRequest>,
    pub edited_index: usize,
    #[serde(default)]
    pub proposed_start: Option<Timestamp>,
    #[serde(default)]
    pub proposed_end: Option<Timestamp>,
}

/// Request to create an event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub mode: EventMode,
    #[serde(default)]
    pub location: String,
    pub sessions: Vec<SessionRequest>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A timing finding for one session.
#[derive(Debug, Clone, Serialize)]
pub struct ConflictErrorResponse {
    pub session_index: usize,
    pub kind: ConflictKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflicts_with: Option<usize>,
    pub message: String,
}

impl From<ConflictError> for ConflictErrorResponse {
    fn from(err: ConflictError) -> Self {
        Self {
            session_index: err.session_index,
            kind: err.kind,
            conflicts_with: err.conflicts_with,
            message: err.message,
        }
    }
}

/// Result of validating a full session list.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateSessionsResponse {
    pub valid: bool,
    pub errors: Vec<ConflictErrorResponse>,
}

/// Result of checking a pending edit.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateEditResponse {
    pub error: Option<ConflictErrorResponse>,
}

/// A session of a created event.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub title: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub location: String,
    pub max_attendees: u32,
}

impl From<ScheduledSession> for SessionResponse {
    fn from(session: ScheduledSession) -> Self {
        Self {
            title: session.title,
            description: session.description,
            start_time: session.window.start().to_rfc3339(),
            end_time: session.window.end().to_rfc3339(),
            location: session.location,
            max_attendees: session.max_attendees,
        }
    }
}

/// Detailed event view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub mode: EventMode,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<String>,
    pub total_capacity: u64,
    pub sessions: Vec<SessionResponse>,
    pub created_at: String,
}

impl From<ScheduledEvent> for EventResponse {
    fn from(event: ScheduledEvent) -> Self {
        Self {
            id: event.id.to_string(),
            starts_at: event.starts_at().map(|t| t.to_rfc3339()),
            ends_at: event.ends_at().map(|t| t.to_rfc3339()),
            total_capacity: event.total_capacity(),
            title: event.title,
            description: event.description,
            mode: event.mode,
            location: event.location,
            sessions: event.sessions.into_iter().map(Into::into).collect(),
            created_at: event.created_at.to_rfc3339(),
        }
    }
}

/// List of events.
#[derive(Debug, Clone, Serialize)]
pub struct EventListResponse {
    pub items: Vec<EventResponse>,
    pub total: usize,
}

impl From<Vec<ScheduledEvent>> for EventListResponse {
    fn from(events: Vec<ScheduledEvent>) -> Self {
        let items: Vec<EventResponse> = events.into_iter().map(Into::into).collect();
        Self {
            total: items.len(),
            items,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    /// Session timing findings, listed under `details.errors`.
    pub fn conflicts(message: impl Into<String>, errors: Vec<ConflictErrorResponse>) -> Self {
        Self {
            code: "SESSION_CONFLICT".to_string(),
            message: message.into(),
            details: Some(serde_json::json!({ "errors": errors })),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}
