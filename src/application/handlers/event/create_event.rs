//! CreateEventHandler - Command handler for creating multi-session events.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::event::{DraftLimits, EventDraft, EventError, EventMode, ScheduledEvent};
use crate::domain::scheduling::SessionSlot;
use crate::ports::EventRepository;

/// Command to create a new event.
#[derive(Debug, Clone)]
pub struct CreateEventCommand {
    pub title: String,
    pub description: String,
    pub mode: EventMode,
    pub location: String,
    /// Sessions in display order; their `saved` flags are ignored.
    pub sessions: Vec<SessionSlot>,
}

/// Result of successful event creation.
#[derive(Debug, Clone)]
pub struct CreateEventResult {
    pub event: ScheduledEvent,
}

/// Handler for creating events.
///
/// Loads the submitted sessions into an `EventDraft` so the same
/// validation, save and submit gates apply as in the interactive form.
pub struct CreateEventHandler {
    repository: Arc<dyn EventRepository>,
    limits: DraftLimits,
}

impl CreateEventHandler {
    pub fn new(repository: Arc<dyn EventRepository>, limits: DraftLimits) -> Self {
        Self { repository, limits }
    }

    pub async fn handle(&self, cmd: CreateEventCommand) -> Result<CreateEventResult, EventError> {
        let session_count = cmd.sessions.len();

        // 1. Rebuild the draft, validating the whole list once
        let mut draft = EventDraft::with_sessions(
            cmd.title,
            cmd.description,
            cmd.mode,
            self.limits,
            cmd.sessions,
        )?;
        draft.set_location(cmd.location);

        // 2. Timing findings take precedence over missing fields
        if !draft.report().is_clean() {
            warn!(
                conflicts = draft.report().len(),
                sessions = session_count,
                "Rejected event with session timing conflicts"
            );
            return Err(EventError::SessionConflicts(draft.report().clone()));
        }

        // 3. Save every session, then submit
        for index in 0..session_count {
            draft.save_session(index)?;
        }
        let event = draft.submit()?;

        // 4. Persist
        self.repository.save(&event).await?;

        info!(
            event_id = %event.id,
            sessions = event.sessions.len(),
            mode = %event.mode,
            "Event created"
        );

        Ok(CreateEventResult { event })
    }
}
