//! Telegram Bot API wire types.
//!
//! Only the fields this bot consumes; everything else in an update is
//! ignored by serde. A non-text message deserializes with `text: None` and
//! is skipped by the polling loop.

use serde::Deserialize;

/// Envelope every Bot API method returns.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One long-poll update.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Incoming>,
}

/// An inbound message within an update.
#[derive(Debug, Clone, Deserialize)]
pub struct Incoming {
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

/// The chat a message arrived from.
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}
