//! Business logic for motbot.
//!
//! This crate defines the conversation state machine and the "ports"
//! (backend traits) that the infrastructure layer implements. It depends
//! only on `motbot-types` -- never on `motbot-infra` or any HTTP crate.

pub mod conversation;
pub mod llm;
pub mod record;
pub mod summary;
