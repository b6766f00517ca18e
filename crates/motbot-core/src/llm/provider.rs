//! ChatModel trait definition.
//!
//! This is the core abstraction over the text-generation service. Uses
//! native async fn in traits (RPITIT, Rust 2024 edition). Both completions
//! in this system are non-streaming with fixed output caps, so there is no
//! streaming surface.

use motbot_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for text-generation backends.
///
/// Implementations live in motbot-infra (e.g., `OpenAiChatModel`).
pub trait ChatModel: Send + Sync {
    /// Human-readable backend name (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
