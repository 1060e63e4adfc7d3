//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `EventRepository` - Persistence of accepted events

mod event_repository;

pub use event_repository::EventRepository;
