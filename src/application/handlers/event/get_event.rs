//! Query handlers for reading scheduled events.

use std::sync::Arc;

use crate::domain::event::{EventError, ScheduledEvent};
use crate::domain::foundation::EventId;
use crate::ports::EventRepository;

/// Query to fetch one event.
#[derive(Debug, Clone)]
pub struct GetEventQuery {
    pub event_id: EventId,
}

/// Handler for fetching a single event.
pub struct GetEventHandler {
    repository: Arc<dyn EventRepository>,
}

impl GetEventHandler {
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetEventQuery) -> Result<ScheduledEvent, EventError> {
        self.repository
            .find_by_id(&query.event_id)
            .await?
            .ok_or(EventError::NotFound(query.event_id))
    }
}

/// Handler for listing all events.
pub struct ListEventsHandler {
    repository: Arc<dyn EventRepository>,
}

impl ListEventsHandler {
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<ScheduledEvent>, EventError> {
        Ok(self.repository.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEventRepository;
    use crate::domain::event::EventMode;
    use crate::domain::foundation::Timestamp;

    fn event() -> ScheduledEvent {
        ScheduledEvent {
            id: EventId::new(),
            title: "Seminar".to_string(),
            description: String::new(),
            mode: EventMode::Virtual,
            location: String::new(),
            sessions: Vec::new(),
            created_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn get_returns_stored_event() {
        let repo = Arc::new(InMemoryEventRepository::new());
        let stored = event();
        repo.save(&stored).await.unwrap();

        let handler = GetEventHandler::new(repo);
        let found = handler
            .handle(GetEventQuery {
                event_id: stored.id,
            })
            .await
            .unwrap();
        assert_eq!(found, stored);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let handler = GetEventHandler::new(Arc::new(InMemoryEventRepository::new()));
        let id = EventId::new();

        let err = handler.handle(GetEventQuery { event_id: id }).await.unwrap_err();
        assert_eq!(err, EventError::NotFound(id));
    }

    #[tokio::test]
    async fn list_returns_everything() {
        let repo = Arc::new(InMemoryEventRepository::new());
        repo.save(&event()).await.unwrap();
        repo.save(&event()).await.unwrap();

        let handler = ListEventsHandler::new(repo);
        assert_eq!(handler.handle().await.unwrap().len(), 2);
    }
}
