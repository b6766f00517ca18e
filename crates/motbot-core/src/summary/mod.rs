//! MoT summary generation.
//!
//! - `render` -- deterministic textual brief from a fetched record
//! - `prompt` -- fixed instruction templates and personas
//! - `Summarizer` -- the LLM-backed summary and follow-up calls

pub mod prompt;
pub mod render;

use motbot_types::llm::{CompletionRequest, LlmError, Message, MessageRole};
use motbot_types::vehicle::VehicleRecord;

use crate::llm::ChatModel;

/// Fixed reply for a record with no test history. No generation call is made.
pub const NO_DATA_MESSAGE: &str = "No MoT test data available for this vehicle.";

/// Placeholder embedded in follow-up prompts when no summary is stored.
pub const NO_SUMMARY_PLACEHOLDER: &str = "No MoT summary available.";

/// Generation settings for the two completion kinds.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    pub model: String,
    pub temperature: f64,
    pub summary_max_tokens: u32,
    pub follow_up_max_tokens: u32,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.5,
            summary_max_tokens: 1000,
            follow_up_max_tokens: 500,
        }
    }
}

/// LLM-backed summarizer for fetched MoT histories.
///
/// Failures surface as typed [`LlmError`]s; rendering them for the user is
/// the conversation engine's concern.
pub struct Summarizer<M> {
    model: M,
    config: SummarizerConfig,
}

impl<M: ChatModel> Summarizer<M> {
    pub fn new(model: M, config: SummarizerConfig) -> Self {
        Self { model, config }
    }

    /// Summarize a fetched record.
    ///
    /// A record with no tests short-circuits to [`NO_DATA_MESSAGE`] without
    /// touching the generation service.
    pub async fn generate(&self, record: &VehicleRecord) -> Result<String, LlmError> {
        if !record.has_tests() {
            return Ok(NO_DATA_MESSAGE.to_string());
        }

        let brief = render::render_brief(record);
        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![Message {
                role: MessageRole::User,
                content: prompt::summary_prompt(&brief),
            }],
            system: Some(prompt::SUMMARY_PERSONA.to_string()),
            max_tokens: self.config.summary_max_tokens,
            temperature: Some(self.config.temperature),
        };

        let response = self.model.complete(&request).await?;
        Ok(response.content.trim().to_string())
    }

    /// Answer a follow-up question against a previously generated summary.
    pub async fn follow_up(
        &self,
        previous_summary: &str,
        question: &str,
    ) -> Result<String, LlmError> {
        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![Message {
                role: MessageRole::User,
                content: prompt::follow_up_prompt(previous_summary, question),
            }],
            system: Some(prompt::FOLLOW_UP_PERSONA.to_string()),
            max_tokens: self.config.follow_up_max_tokens,
            temperature: Some(self.config.temperature),
        };

        let response = self.model.complete(&request).await?;
        Ok(response.content.trim().to_string())
    }
}
