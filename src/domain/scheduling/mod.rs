//! Scheduling Module - Session timing validation.
//!
//! Pure functions over an in-memory session list. No ports or adapters are
//! involved: the caller owns the list and writes the resulting report back
//! into its own state.
//!
//! # Components
//!
//! - `TimeWindow` - Half-open `[start, end)` interval with the overlap test
//! - `SessionSlot` - A session as it is being edited (times optional)
//! - `ConflictError` / `ConflictReport` - Findings, at most one per session
//! - `SessionConflictValidator` - Full-list and single-edit validation

mod conflict;
mod session_slot;
mod time_window;
mod validator;

pub use conflict::{ConflictError, ConflictKind, ConflictReport, TIME_RANGE_MESSAGE};
pub use session_slot::SessionSlot;
pub use time_window::TimeWindow;
pub use validator::SessionConflictValidator;
