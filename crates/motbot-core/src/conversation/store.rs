//! Per-chat session store.
//!
//! Sessions are keyed by the platform chat id and created on first contact.
//! The polling loop processes updates sequentially, so a given chat's entry
//! is only touched by one handler at a time; the DashMap keeps the store
//! `Sync` without a global lock.

use dashmap::DashMap;

use motbot_types::session::Session;

/// In-memory store of live conversations, keyed by chat id.
#[derive(Default)]
pub struct SessionStore {
    sessions: DashMap<i64, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Run `f` against the session for `chat_id`, creating the session first
    /// if this is the chat's first message.
    ///
    /// The entry guard is held only for the duration of `f`; never call this
    /// re-entrantly for the same chat.
    pub fn with_session<T>(&self, chat_id: i64, f: impl FnOnce(&mut Session) -> T) -> T {
        let mut entry = self.sessions.entry(chat_id).or_insert_with(Session::new);
        f(entry.value_mut())
    }

    /// Snapshot of a chat's session, if one exists.
    pub fn get(&self, chat_id: i64) -> Option<Session> {
        self.sessions.get(&chat_id).map(|entry| entry.value().clone())
    }
}
