//! Route configuration for event endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_event, get_event, list_events, validate_edit, validate_sessions, EventHandlers,
};

/// Creates the event router with all endpoints.
///
/// Routes:
/// - `POST /api/events/sessions/validate` - Validate a session list
/// - `POST /api/events/sessions/validate-edit` - Check one pending time edit
/// - `POST /api/events` - Create an event
/// - `GET /api/events` - List events
/// - `GET /api/events/:id` - Get one event
pub fn event_routes(handlers: EventHandlers) -> Router {
    Router::new()
        .route("/api/events/sessions/validate", post(validate_sessions))
        .route("/api/events/sessions/validate-edit", post(validate_edit))
        .route("/api/events", post(create_event).get(list_events))
        .route("/api/events/:id", get(get_event))
        .with_state(handlers)
}
