//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod event;

pub use event::{
    CreateEventCommand, CreateEventHandler, CreateEventResult, GetEventHandler, GetEventQuery,
    ListEventsHandler,
};
