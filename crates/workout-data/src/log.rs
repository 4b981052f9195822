//! Append-only, in-memory collection of loaded sessions.

use workout_core::models::SessionEntry;

/// Sessions in the order they were loaded or added.
///
/// Duplicate dates and exercises are allowed and simply accumulate. Queries
/// borrow the log as a slice via [`SessionLog::sessions`].
#[derive(Debug, Clone, Default)]
pub struct SessionLog {
    sessions: Vec<SessionEntry>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from already-constructed sessions, keeping their order.
    pub fn from_sessions(sessions: Vec<SessionEntry>) -> Self {
        Self { sessions }
    }

    /// Append one session.
    pub fn add_session(&mut self, session: SessionEntry) {
        self.sessions.push(session);
    }

    /// Append a batch of sessions, keeping their order.
    pub fn extend<I: IntoIterator<Item = SessionEntry>>(&mut self, sessions: I) {
        self.sessions.extend(sessions);
    }

    pub fn sessions(&self) -> &[SessionEntry] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
