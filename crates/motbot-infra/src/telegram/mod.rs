//! Telegram Bot API transport.
//!
//! - `client` -- long polling (`getUpdates`) and outbound `sendMessage`
//! - `types` -- the slice of the Bot API wire surface this bot consumes

pub mod client;
pub mod types;

pub use client::TelegramClient;
pub use types::{Chat, Incoming, Update};
