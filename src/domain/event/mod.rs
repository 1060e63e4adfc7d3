//! Event domain module.
//!
//! Handles composing a multi-session event: the editable draft, the gating
//! of session saves and event submission on the conflict report, and the
//! accepted `ScheduledEvent` handed to the data store.

mod draft;
mod errors;
mod mode;
mod scheduled;

pub use draft::{
    DraftLimits, EventDraft, SessionDetails, DEFAULT_MAX_SESSIONS, DEFAULT_MAX_TITLE_LENGTH,
    MAX_ATTENDEES_LIMIT,
};
pub use errors::EventError;
pub use mode::EventMode;
pub use scheduled::{ScheduledEvent, ScheduledSession};
