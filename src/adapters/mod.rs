//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST endpoints (axum)
//! - `memory` - In-process event store

pub mod http;
pub mod memory;

pub use http::{build_router, EventHandlers};
pub use memory::InMemoryEventRepository;
