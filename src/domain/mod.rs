//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `scheduling` - Session time-range and overlap validation
//! - `event` - Event draft lifecycle and the accepted scheduled event

pub mod event;
pub mod foundation;
pub mod scheduling;
