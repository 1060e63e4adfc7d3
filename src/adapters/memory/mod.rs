//! In-memory adapters.

mod event_repository;

pub use event_repository::InMemoryEventRepository;
