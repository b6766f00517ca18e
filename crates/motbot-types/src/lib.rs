//! Shared domain types for motbot.
//!
//! This crate contains the domain types used across the relay: chat
//! sessions, DVSA vehicle records, chat-completion shapes, configuration,
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror,
//! secrecy.

pub mod config;
pub mod error;
pub mod llm;
pub mod session;
pub mod vehicle;
