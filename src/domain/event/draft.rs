//! EventDraft aggregate - the event-creation form state.
//!
//! Owns the session list and the conflict report derived from it. Every
//! change to a session's timing, and every add/remove, recomputes the report
//! from scratch.
//!
//! # Save and submit gating
//!
//! A session can only be saved, and the event only submitted, while the
//! report is clean. Saved sessions are read-only; there is no unsave.

use serde::{Deserialize, Serialize};

use super::{EventError, EventMode, ScheduledEvent, ScheduledSession};
use crate::domain::foundation::{EventId, Timestamp, ValidationError};
use crate::domain::scheduling::{
    ConflictError, ConflictReport, SessionConflictValidator, SessionSlot,
};

/// Default cap on sessions per event.
pub const DEFAULT_MAX_SESSIONS: usize = 50;

/// Default maximum length for event titles.
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;

/// Upper bound accepted for a session's attendee cap.
pub const MAX_ATTENDEES_LIMIT: u32 = 100_000;

/// Size limits applied to a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftLimits {
    pub max_sessions: usize,
    pub max_title_length: usize,
}

impl Default for DraftLimits {
    fn default() -> Self {
        Self {
            max_sessions: DEFAULT_MAX_SESSIONS,
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
        }
    }
}

/// Editable, non-timing fields of a session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionDetails {
    pub title: String,
    pub description: String,
    pub location: String,
    pub max_attendees: u32,
}

/// Event being composed by an organizer.
///
/// # Invariants
///
/// - `sessions` is never empty
/// - `report` always equals `validate_all(sessions)`
/// - sessions of a virtual event have an empty location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    title: String,
    description: String,
    mode: EventMode,
    location: String,
    sessions: Vec<SessionSlot>,
    report: ConflictReport,
    limits: DraftLimits,
}

impl EventDraft {
    /// Opens a draft seeded with one empty session.
    pub fn new(title: impl Into<String>, description: impl Into<String>, mode: EventMode) -> Self {
        Self::with_limits(title, description, mode, DraftLimits::default())
    }

    /// Opens a draft with explicit limits.
    pub fn with_limits(
        title: impl Into<String>,
        description: impl Into<String>,
        mode: EventMode,
        limits: DraftLimits,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            mode,
            location: String::new(),
            sessions: vec![SessionSlot::empty()],
            report: ConflictReport::new(),
            limits,
        }
    }

    /// Opens a draft holding an already composed session list.
    ///
    /// Saved flags are cleared and the report is computed once over the
    /// whole list. Session locations are dropped for virtual events.
    ///
    /// # Errors
    ///
    /// - `Validation` if `sessions` is empty
    /// - `SessionLimitReached` if it holds more sessions than the cap
    pub fn with_sessions(
        title: impl Into<String>,
        description: impl Into<String>,
        mode: EventMode,
        limits: DraftLimits,
        mut sessions: Vec<SessionSlot>,
    ) -> Result<Self, EventError> {
        if sessions.is_empty() {
            return Err(ValidationError::empty_field("sessions").into());
        }
        if sessions.len() > limits.max_sessions {
            return Err(EventError::SessionLimitReached(limits.max_sessions));
        }

        for session in &mut sessions {
            session.saved = false;
            if mode.is_virtual() {
                session.location.clear();
            }
        }

        let mut draft = Self::with_limits(title, description, mode, limits);
        draft.sessions = sessions;
        draft.revalidate();
        Ok(draft)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn mode(&self) -> EventMode {
        self.mode
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn sessions(&self) -> &[SessionSlot] {
        &self.sessions
    }

    pub fn session(&self, index: usize) -> Option<&SessionSlot> {
        self.sessions.get(index)
    }

    /// Current timing findings, keyed by session index.
    pub fn report(&self) -> &ConflictReport {
        &self.report
    }

    pub fn limits(&self) -> DraftLimits {
        self.limits
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Event-level fields
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Sets the venue address or meeting link.
    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    /// Switches between in-person and virtual.
    ///
    /// Going virtual clears every session's location, saved ones included.
    pub fn set_mode(&mut self, mode: EventMode) {
        self.mode = mode;
        if mode.is_virtual() {
            for session in &mut self.sessions {
                session.location.clear();
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Session list
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends an empty session and returns its index.
    ///
    /// # Errors
    ///
    /// - `SessionLimitReached` if the draft is already at its session cap
    pub fn add_session(&mut self) -> Result<usize, EventError> {
        if self.sessions.len() >= self.limits.max_sessions {
            return Err(EventError::SessionLimitReached(self.limits.max_sessions));
        }
        self.sessions.push(SessionSlot::empty());
        self.revalidate();
        Ok(self.sessions.len() - 1)
    }

    /// Removes a session; later sessions shift down by one.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the index is out of range
    /// - `LastSession` if it is the only session left
    pub fn remove_session(&mut self, index: usize) -> Result<SessionSlot, EventError> {
        if index >= self.sessions.len() {
            return Err(EventError::SessionNotFound(index));
        }
        if self.sessions.len() == 1 {
            return Err(EventError::LastSession);
        }
        let removed = self.sessions.remove(index);
        self.revalidate();
        Ok(removed)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Session edits
    // ─────────────────────────────────────────────────────────────────────────

    /// Sets a session's start time.
    ///
    /// The value is committed even when it conflicts; the returned finding
    /// is the immediate feedback computed before the commit.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the index is out of range
    /// - `SessionLocked` if the session is saved
    pub fn propose_start(
        &mut self,
        index: usize,
        start: Timestamp,
    ) -> Result<Option<ConflictError>, EventError> {
        self.ensure_editable(index)?;
        let advisory = SessionConflictValidator::validate_edit(&self.sessions, index, Some(start), None);
        self.sessions[index].start_time = Some(start);
        self.revalidate();
        Ok(advisory)
    }

    /// Sets a session's end time. See [`EventDraft::propose_start`].
    pub fn propose_end(
        &mut self,
        index: usize,
        end: Timestamp,
    ) -> Result<Option<ConflictError>, EventError> {
        self.ensure_editable(index)?;
        let advisory = SessionConflictValidator::validate_edit(&self.sessions, index, None, Some(end));
        self.sessions[index].end_time = Some(end);
        self.revalidate();
        Ok(advisory)
    }

    /// Replaces a session's title, description, location and attendee cap.
    ///
    /// The location is dropped for virtual events.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the index is out of range
    /// - `SessionLocked` if the session is saved
    pub fn update_details(&mut self, index: usize, details: SessionDetails) -> Result<(), EventError> {
        self.ensure_editable(index)?;
        let session = &mut self.sessions[index];
        session.title = details.title;
        session.description = details.description;
        session.location = if self.mode.is_virtual() {
            String::new()
        } else {
            details.location
        };
        session.max_attendees = details.max_attendees;
        Ok(())
    }

    /// Marks a session as saved, making it read-only.
    ///
    /// Saving an already saved session is a no-op.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the index is out of range
    /// - `Validation` if a required field is missing or out of range
    /// - `SessionConflicts` if any session in the draft has a finding
    pub fn save_session(&mut self, index: usize) -> Result<(), EventError> {
        let session = self
            .sessions
            .get(index)
            .ok_or(EventError::SessionNotFound(index))?;
        if session.saved {
            return Ok(());
        }

        Self::validate_session_fields(session, self.mode)?;
        if !self.report.is_clean() {
            return Err(EventError::SessionConflicts(self.report.clone()));
        }

        self.sessions[index].saved = true;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────────────────────

    /// Produces the event to persist.
    ///
    /// # Errors
    ///
    /// - `Validation` if the title is empty or too long
    /// - `SessionConflicts` if any session has a finding
    /// - `UnsavedSessions` if any session has not been saved
    pub fn submit(&self) -> Result<ScheduledEvent, EventError> {
        self.validate_title()?;
        if !self.report.is_clean() {
            return Err(EventError::SessionConflicts(self.report.clone()));
        }

        let unsaved: Vec<usize> = self
            .sessions
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.saved)
            .map(|(i, _)| i)
            .collect();
        if !unsaved.is_empty() {
            return Err(EventError::UnsavedSessions(unsaved));
        }

        let mut sessions = Vec::with_capacity(self.sessions.len());
        for (index, slot) in self.sessions.iter().enumerate() {
            // Saved sessions always have both times.
            let window = slot.window().ok_or(EventError::UnsavedSessions(vec![index]))?;
            sessions.push(ScheduledSession {
                title: slot.title.clone(),
                description: slot.description.clone(),
                window,
                location: slot.location.clone(),
                max_attendees: slot.max_attendees,
            });
        }

        Ok(ScheduledEvent {
            id: EventId::new(),
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            mode: self.mode,
            location: self.location.clone(),
            sessions,
            created_at: Timestamp::now(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    fn revalidate(&mut self) {
        self.report = SessionConflictValidator::validate_all(&self.sessions);
    }

    fn ensure_editable(&self, index: usize) -> Result<(), EventError> {
        match self.sessions.get(index) {
            None => Err(EventError::SessionNotFound(index)),
            Some(session) if session.saved => Err(EventError::SessionLocked(index)),
            Some(_) => Ok(()),
        }
    }

    fn validate_title(&self) -> Result<(), ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        let len = title.chars().count();
        if len > self.limits.max_title_length {
            return Err(ValidationError::out_of_range(
                "title",
                1,
                self.limits.max_title_length as i64,
                len as i64,
            ));
        }
        Ok(())
    }

    fn validate_session_fields(session: &SessionSlot, mode: EventMode) -> Result<(), ValidationError> {
        if session.title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if session.description.trim().is_empty() {
            return Err(ValidationError::empty_field("description"));
        }
        if session.start_time.is_none() {
            return Err(ValidationError::empty_field("start_time"));
        }
        if session.end_time.is_none() {
            return Err(ValidationError::empty_field("end_time"));
        }
        if session.max_attendees == 0 || session.max_attendees > MAX_ATTENDEES_LIMIT {
            return Err(ValidationError::out_of_range(
                "max_attendees",
                1,
                i64::from(MAX_ATTENDEES_LIMIT),
                i64::from(session.max_attendees),
            ));
        }
        if !mode.is_virtual() && session.location.trim().is_empty() {
            return Err(ValidationError::empty_field("location"));
        }
        Ok(())
    }
}
