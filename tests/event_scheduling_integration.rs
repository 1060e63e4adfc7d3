//! Integration tests for event scheduling.
//!
//! These tests drive the public API end to end:
//! 1. An organizer composes a draft, hits conflicts, fixes them and submits
//! 2. The HTTP router validates session lists and persists created events

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use research_collab::adapters::{build_router, EventHandlers, InMemoryEventRepository};
use research_collab::config::ServerConfig;
use research_collab::domain::event::{DraftLimits, EventDraft, EventError, EventMode, SessionDetails};
use research_collab::domain::foundation::Timestamp;
use research_collab::domain::scheduling::{ConflictKind, SessionConflictValidator};
use research_collab::ports::EventRepository;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn at(hhmm: &str) -> Timestamp {
    Timestamp::parse_rfc3339("time", &format!("2025-03-10T{}:00Z", hhmm)).unwrap()
}

fn details(title: &str) -> SessionDetails {
    SessionDetails {
        title: title.to_string(),
        description: format!("{} description", title),
        location: "Room 101".to_string(),
        max_attendees: 30,
    }
}

fn app_with(repository: Arc<InMemoryEventRepository>) -> Router {
    let handlers = EventHandlers::from_repository(repository, DraftLimits::default());
    build_router(handlers, &ServerConfig::default())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn session_json(title: &str, start: &str, end: &str) -> Value {
    json!({
        "title": title,
        "description": "Talk",
        "start_time": format!("2025-03-10T{}:00Z", start),
        "end_time": format!("2025-03-10T{}:00Z", end),
        "location": "Hall A",
        "max_attendees": 40
    })
}

// =============================================================================
// Draft lifecycle
// =============================================================================

#[test]
fn organizer_resolves_conflict_then_submits() {
    let mut draft = EventDraft::new("Research Day", "Talks", EventMode::InPerson);
    draft.update_details(0, details("Keynote")).unwrap();
    draft.propose_start(0, at("09:00")).unwrap();
    draft.propose_end(0, at("10:00")).unwrap();

    let second = draft.add_session().unwrap();
    draft.update_details(second, details("Panel")).unwrap();
    let advisory = draft.propose_start(second, at("09:30")).unwrap();
    assert_eq!(advisory.map(|e| e.kind), Some(ConflictKind::Conflict));

    draft.propose_end(second, at("10:30")).unwrap();
    assert!(draft.report().contains(0));
    assert!(draft.report().contains(second));

    // Nothing can be saved while the overlap stands.
    assert!(matches!(
        draft.save_session(0),
        Err(EventError::SessionConflicts(_))
    ));

    // Moving the panel to start exactly when the keynote ends clears both.
    let advisory = draft.propose_start(second, at("10:00")).unwrap();
    assert!(advisory.is_none());
    assert!(draft.report().is_clean());

    draft.save_session(0).unwrap();
    assert!(matches!(
        draft.submit(),
        Err(EventError::UnsavedSessions(ref pending)) if pending == &vec![second]
    ));

    draft.save_session(second).unwrap();
    let event = draft.submit().unwrap();
    assert_eq!(event.sessions.len(), 2);
    assert_eq!(event.starts_at(), Some(at("09:00")));
    assert_eq!(event.ends_at(), Some(at("10:30")));
}

#[test]
fn inverted_window_is_reported_alone() {
    let mut draft = EventDraft::new("Workshop", "", EventMode::Virtual);
    draft.propose_start(0, at("11:00")).unwrap();
    let advisory = draft.propose_end(0, at("10:00")).unwrap();

    let advisory = advisory.unwrap();
    assert!(advisory.is_time_range());
    assert_eq!(draft.report().len(), 1);
    assert!(draft.report().get(0).unwrap().is_time_range());
}

#[test]
fn removing_a_session_reindexes_findings() {
    let mut draft = EventDraft::new("Symposium", "", EventMode::InPerson);
    draft.propose_start(0, at("08:00")).unwrap();
    draft.propose_end(0, at("08:30")).unwrap();

    for (start, end) in [("09:00", "10:00"), ("09:30", "10:30")] {
        let index = draft.add_session().unwrap();
        draft.propose_start(index, at(start)).unwrap();
        draft.propose_end(index, at(end)).unwrap();
    }
    assert!(draft.report().contains(1));
    assert!(draft.report().contains(2));

    draft.remove_session(0).unwrap();
    assert_eq!(
        draft.report(),
        &SessionConflictValidator::validate_all(draft.sessions())
    );
    assert_eq!(draft.report().get(0).unwrap().conflicts_with, Some(1));
    assert_eq!(draft.report().get(1).unwrap().conflicts_with, Some(0));
}

// =============================================================================
// HTTP
// =============================================================================

#[tokio::test]
async fn validate_endpoint_reports_overlaps() {
    let app = app_with(Arc::new(InMemoryEventRepository::new()));

    let (status, body) = send(
        &app,
        post(
            "/api/events/sessions/validate",
            json!({
                "sessions": [
                    session_json("A", "09:00", "10:00"),
                    session_json("B", "09:30", "10:30"),
                    session_json("C", "10:30", "11:00")
                ]
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["session_index"], 0);
    assert_eq!(errors[0]["conflicts_with"], 1);
    assert_eq!(errors[1]["session_index"], 1);
    assert_eq!(errors[1]["conflicts_with"], 0);
}

#[tokio::test]
async fn created_event_can_be_fetched_and_listed() {
    let repository = Arc::new(InMemoryEventRepository::new());
    let app = app_with(repository.clone());

    let (status, created) = send(
        &app,
        post(
            "/api/events",
            json!({
                "title": "Lab Open House",
                "mode": "in_person",
                "location": "Building 7",
                "sessions": [
                    session_json("Tour", "13:00", "14:00"),
                    session_json("Demos", "14:00", "15:00")
                ]
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["total_capacity"], 80);
    assert_eq!(repository.len(), 1);

    let id = created["id"].as_str().unwrap();
    let (status, fetched) = send(&app, get(&format!("/api/events/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "Lab Open House");
    assert_eq!(fetched["sessions"].as_array().unwrap().len(), 2);

    let (status, listed) = send(&app, get("/api/events")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["total"], 1);

    let stored = repository.list().await.unwrap();
    assert_eq!(stored[0].id.to_string(), id);
}

#[tokio::test]
async fn conflicting_event_is_rejected_and_not_stored() {
    let repository = Arc::new(InMemoryEventRepository::new());
    let app = app_with(repository.clone());

    let (status, body) = send(
        &app,
        post(
            "/api/events",
            json!({
                "title": "Overbooked",
                "mode": "in_person",
                "sessions": [
                    session_json("A", "09:00", "12:00"),
                    session_json("B", "10:00", "11:00")
                ]
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "SESSION_CONFLICT");
    assert_eq!(body["details"]["errors"].as_array().unwrap().len(), 2);
    assert!(repository.is_empty());
}
