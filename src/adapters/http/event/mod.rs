//! HTTP adapter for event endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ConflictErrorResponse, CreateEventRequest, ErrorResponse, EventListResponse, EventResponse,
    SessionRequest, SessionResponse, ValidateEditRequest, ValidateEditResponse,
    ValidateSessionsRequest, ValidateSessionsResponse,
};
pub use handlers::EventHandlers;
pub use routes::event_routes;
