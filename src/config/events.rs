//! Event scheduling limits

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::event::{DraftLimits, DEFAULT_MAX_SESSIONS, DEFAULT_MAX_TITLE_LENGTH};

/// Hard ceiling for `max_sessions_per_event`.
const SESSION_CAP_CEILING: usize = 500;

/// Limits applied to event drafts
#[derive(Debug, Clone, Deserialize)]
pub struct EventsConfig {
    /// Maximum number of sessions one event may hold
    #[serde(default = "default_max_sessions")]
    pub max_sessions_per_event: usize,

    /// Maximum event title length in characters
    #[serde(default = "default_max_title_length")]
    pub max_title_length: usize,
}

impl EventsConfig {
    /// Limits to hand to new drafts
    pub fn draft_limits(&self) -> DraftLimits {
        DraftLimits {
            max_sessions: self.max_sessions_per_event,
            max_title_length: self.max_title_length,
        }
    }

    /// Validate event limits
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_sessions_per_event == 0 || self.max_sessions_per_event > SESSION_CAP_CEILING {
            return Err(ValidationError::InvalidSessionLimit);
        }
        if self.max_title_length == 0 {
            return Err(ValidationError::InvalidTitleLength);
        }
        Ok(())
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            max_sessions_per_event: default_max_sessions(),
            max_title_length: default_max_title_length(),
        }
    }
}

fn default_max_sessions() -> usize {
    DEFAULT_MAX_SESSIONS
}

fn default_max_title_length() -> usize {
    DEFAULT_MAX_TITLE_LENGTH
}
