//! Event repository port.
//!
//! Defines the contract for persisting and retrieving scheduled events.
//! The data store behind it is an external collaborator; only the operations
//! the create/read flow needs are declared.

use crate::domain::event::ScheduledEvent;
use crate::domain::foundation::{DomainError, EventId};
use async_trait::async_trait;

/// Repository port for scheduled event persistence.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Save a new event.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, event: &ScheduledEvent) -> Result<(), DomainError>;

    /// Find an event by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &EventId) -> Result<Option<ScheduledEvent>, DomainError>;

    /// List all events, ordered by first session start.
    async fn list(&self) -> Result<Vec<ScheduledEvent>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn event_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn EventRepository) {}
    }
}
