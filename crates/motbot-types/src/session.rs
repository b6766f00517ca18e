//! Chat session types.
//!
//! One session per chat, created on first contact. The two-stage
//! conversation is an explicit tagged enum with exhaustive transition
//! handling; the reset on exit is a first-class transition, not a side
//! effect.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Where a chat session sits in the two-stage conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Waiting for a vehicle registration number (the initial state).
    AwaitingRegistration,
    /// A summary has been produced; free-form questions are expected.
    AwaitingFollowUp,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::AwaitingRegistration => write!(f, "awaiting_registration"),
            SessionState::AwaitingFollowUp => write!(f, "awaiting_follow_up"),
        }
    }
}

impl FromStr for SessionState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "awaiting_registration" => Ok(SessionState::AwaitingRegistration),
            "awaiting_follow_up" => Ok(SessionState::AwaitingFollowUp),
            other => Err(format!("invalid session state: '{other}'")),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::AwaitingRegistration
    }
}

/// One conversation with one chat.
///
/// `last_summary` is only set once a lookup has produced a summary; a
/// follow-up answered without one substitutes a placeholder instead of
/// failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub state: SessionState,
    pub last_summary: Option<String>,
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Create a fresh session in the initial state.
    pub fn new() -> Self {
        Self {
            id: Uuid::now_v7(),
            state: SessionState::AwaitingRegistration,
            last_summary: None,
            started_at: Utc::now(),
        }
    }

    /// The exit transition: back to awaiting a registration, with no summary
    /// retained.
    pub fn reset(&mut self) {
        self.state = SessionState::AwaitingRegistration;
        self.last_summary = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_state_roundtrip() {
        for state in [
            SessionState::AwaitingRegistration,
            SessionState::AwaitingFollowUp,
        ] {
            let s = state.to_string();
            let parsed: SessionState = s.parse().unwrap();
            assert_eq!(state, parsed);
        }
    }

    #[test]
    fn test_session_state_default_is_initial() {
        assert_eq!(SessionState::default(), SessionState::AwaitingRegistration);
    }

    #[test]
    fn test_new_session() {
        let session = Session::new();
        assert_eq!(session.state, SessionState::AwaitingRegistration);
        assert!(session.last_summary.is_none());
    }

    #[test]
    fn test_reset_clears_summary_and_state() {
        let mut session = Session::new();
        session.state = SessionState::AwaitingFollowUp;
        session.last_summary = Some("A fine vehicle.".to_string());

        session.reset();
        assert_eq!(session.state, SessionState::AwaitingRegistration);
        assert!(session.last_summary.is_none());
    }
}
