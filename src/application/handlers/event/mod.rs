//! Event command and query handlers.

mod create_event;
mod get_event;

pub use create_event::{CreateEventCommand, CreateEventHandler, CreateEventResult};
pub use get_event::{GetEventHandler, GetEventQuery, ListEventsHandler};
