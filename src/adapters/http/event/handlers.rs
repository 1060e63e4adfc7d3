//! HTTP handlers for event endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::application::handlers::event::{
    CreateEventCommand, CreateEventHandler, GetEventHandler, GetEventQuery, ListEventsHandler,
};
use crate::domain::event::{DraftLimits, EventError};
use crate::domain::foundation::EventId;
use crate::domain::scheduling::{SessionConflictValidator, SessionSlot};
use crate::ports::EventRepository;

use super::dto::{
    ConflictErrorResponse, CreateEventRequest, ErrorResponse, EventListResponse, EventResponse,
    ValidateEditRequest, ValidateEditResponse, ValidateSessionsRequest, ValidateSessionsResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct EventHandlers {
    create_handler: Arc<CreateEventHandler>,
    get_handler: Arc<GetEventHandler>,
    list_handler: Arc<ListEventsHandler>,
    limits: DraftLimits,
}

impl EventHandlers {
    pub fn new(
        create_handler: Arc<CreateEventHandler>,
        get_handler: Arc<GetEventHandler>,
        list_handler: Arc<ListEventsHandler>,
        limits: DraftLimits,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            list_handler,
            limits,
        }
    }

    /// Wires all handlers to one repository.
    pub fn from_repository(repository: Arc<dyn EventRepository>, limits: DraftLimits) -> Self {
        Self::new(
            Arc::new(CreateEventHandler::new(repository.clone(), limits)),
            Arc::new(GetEventHandler::new(repository.clone())),
            Arc::new(ListEventsHandler::new(repository)),
            limits,
        )
    }

    /// Rejects session lists longer than a draft may hold.
    fn ensure_within_cap(&self, session_count: usize) -> Result<(), EventError> {
        if session_count > self.limits.max_sessions {
            return Err(EventError::SessionLimitReached(self.limits.max_sessions));
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/events/sessions/validate - Validate a full session list
pub async fn validate_sessions(
    State(handlers): State<EventHandlers>,
    Json(req): Json<ValidateSessionsRequest>,
) -> Response {
    if let Err(e) = handlers.ensure_within_cap(req.sessions.len()) {
        return handle_event_error(e);
    }
    let sessions: Vec<SessionSlot> = req.sessions.into_iter().map(Into::into).collect();
    let report = SessionConflictValidator::validate_all(&sessions);

    debug!(
        sessions = sessions.len(),
        findings = report.len(),
        "Validated session list"
    );

    let response = ValidateSessionsResponse {
        valid: report.is_clean(),
        errors: report.into_errors().into_iter().map(Into::into).collect(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /api/events/sessions/validate-edit - Check one pending time edit
pub async fn validate_edit(
    State(handlers): State<EventHandlers>,
    Json(req): Json<ValidateEditRequest>,
) -> Response {
    if let Err(e) = handlers.ensure_within_cap(req.sessions.len()) {
        return handle_event_error(e);
    }
    let sessions: Vec<SessionSlot> = req.sessions.into_iter().map(Into::into).collect();
    let error = SessionConflictValidator::validate_edit(
        &sessions,
        req.edited_index,
        req.proposed_start,
        req.proposed_end,
    );

    debug!(
        edited_index = req.edited_index,
        rejected = error.is_some(),
        "Validated session edit"
    );

    let response = ValidateEditResponse {
        error: error.map(ConflictErrorResponse::from),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /api/events - Create an event
pub async fn create_event(
    State(handlers): State<EventHandlers>,
    Json(req): Json<CreateEventRequest>,
) -> Response {
    let cmd = CreateEventCommand {
        title: req.title,
        description: req.description,
        mode: req.mode,
        location: req.location,
        sessions: req.sessions.into_iter().map(Into::into).collect(),
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(result) => {
            let response: EventResponse = result.event.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_event_error(e),
    }
}

/// GET /api/events/:id - Get event details
pub async fn get_event(
    State(handlers): State<EventHandlers>,
    Path(event_id): Path<String>,
) -> Response {
    let event_id = match event_id.parse::<EventId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid event ID")),
            )
                .into_response()
        }
    };

    match handlers.get_handler.handle(GetEventQuery { event_id }).await {
        Ok(event) => {
            let response: EventResponse = event.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_event_error(e),
    }
}

/// GET /api/events - List events
pub async fn list_events(State(handlers): State<EventHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(events) => {
            let response: EventListResponse = events.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_event_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_event_error(error: EventError) -> Response {
    let message = error.message();
    match error {
        EventError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Event", &id.to_string())),
        )
            .into_response(),
        EventError::SessionConflicts(report) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::conflicts(
                message,
                report.into_errors().into_iter().map(Into::into).collect(),
            )),
        )
            .into_response(),
        EventError::Validation(_)
        | EventError::SessionNotFound(_)
        | EventError::SessionLocked(_)
        | EventError::SessionLimitReached(_)
        | EventError::LastSession
        | EventError::UnsavedSessions(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(message)),
        )
            .into_response(),
        EventError::Infrastructure(msg) => {
            tracing::error!("Event store failure: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal server error")),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;
    use crate::domain::scheduling::{ConflictError, ConflictReport};

    #[test]
    fn event_error_not_found_maps_to_404() {
        let response = handle_event_error(EventError::NotFound(EventId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn event_error_conflicts_map_to_422() {
        let mut report = ConflictReport::new();
        report.insert(ConflictError::time_range(0));
        let response = handle_event_error(EventError::SessionConflicts(report));
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn event_error_validation_maps_to_400() {
        let error = EventError::Validation(ValidationError::empty_field("title"));
        let response = handle_event_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn event_error_session_limit_maps_to_400() {
        let response = handle_event_error(EventError::SessionLimitReached(50));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn event_error_infrastructure_maps_to_500() {
        let response = handle_event_error(EventError::infrastructure("disk full"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
