//! Research Collab - event scheduling service
//!
//! Organizers compose multi-session events. Every session carries a time
//! window, and the scheduling domain reports sessions whose window is
//! inverted or overlaps another session of the same event. Sessions cannot
//! be saved and events cannot be submitted while conflicts remain.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
