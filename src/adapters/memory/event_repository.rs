//! In-memory event repository.
//!
//! Backs the server when no external data store is wired in, and serves as
//! the repository in handler and HTTP tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::event::ScheduledEvent;
use crate::domain::foundation::{DomainError, ErrorCode, EventId};
use crate::ports::EventRepository;

/// Event store held in process memory.
#[derive(Default)]
pub struct InMemoryEventRepository {
    events: RwLock<HashMap<EventId, ScheduledEvent>>,
}

impl InMemoryEventRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.events.read().map(|events| events.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> DomainError {
    DomainError::new(ErrorCode::InternalError, "Event store lock poisoned")
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn save(&self, event: &ScheduledEvent) -> Result<(), DomainError> {
        let mut events = self.events.write().map_err(|_| poisoned())?;
        if events.contains_key(&event.id) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Event already exists: {}", event.id),
            ));
        }
        events.insert(event.id, event.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<ScheduledEvent>, DomainError> {
        let events = self.events.read().map_err(|_| poisoned())?;
        Ok(events.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<ScheduledEvent>, DomainError> {
        let events = self.events.read().map_err(|_| poisoned())?;
        let mut listed: Vec<ScheduledEvent> = events.values().cloned().collect();
        listed.sort_by_key(|e| (e.starts_at(), e.created_at));
        Ok(listed)
    }
}
