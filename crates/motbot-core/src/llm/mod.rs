//! Chat-model abstraction.
//!
//! - `provider` -- `ChatModel`: RPITIT trait for concrete generation backends

pub mod provider;

pub use provider::ChatModel;
