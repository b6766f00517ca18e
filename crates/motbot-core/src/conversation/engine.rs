//! Conversation engine: the two-state message-handling flow.
//!
//! One inbound message produces an ordered list of outbound replies. The
//! state machine is an exhaustive match on [`SessionState`]; the reset on
//! "exit" is a first-class transition. Token and record failures are not
//! distinguished to the user -- both collapse into the single "no history"
//! notice -- while generation failures are rendered inline from their typed
//! error.

use motbot_types::session::SessionState;

use crate::llm::ChatModel;
use crate::record::VehicleRecordSource;
use crate::summary::{NO_SUMMARY_PLACEHOLDER, Summarizer};

use super::store::SessionStore;

/// Keyword (case-insensitive, trimmed) that ends a follow-up session.
const EXIT_KEYWORD: &str = "exit";

const NO_HISTORY_MESSAGE: &str =
    "⚠️ No MoT history found. Please check the registration number and try again.";

const FOLLOW_UP_INVITATION: &str = "💬 You can ask further questions about this vehicle's \
                                    history. Type your question or type 'exit' to stop.";

const FAREWELL_MESSAGE: &str = "👋 Exiting chat. Have a great day!";

/// The message-handling entry point for every chat.
///
/// Owns the session store; the record source and summarizer are injected so
/// the engine can be exercised against fakes.
pub struct ConversationEngine<R, M> {
    records: R,
    summarizer: Summarizer<M>,
    sessions: SessionStore,
}

impl<R, M> ConversationEngine<R, M>
where
    R: VehicleRecordSource,
    M: ChatModel,
{
    pub fn new(records: R, summarizer: Summarizer<M>) -> Self {
        Self {
            records,
            summarizer,
            sessions: SessionStore::new(),
        }
    }

    /// The live session store (for inspection).
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Handle one inbound text message, returning replies in send order.
    ///
    /// `/start` arrives here like any other text and is treated as a
    /// registration attempt.
    pub async fn handle_message(&self, chat_id: i64, text: &str) -> Vec<String> {
        let state = self.sessions.with_session(chat_id, |session| session.state);

        match state {
            SessionState::AwaitingRegistration => self.handle_registration(chat_id, text).await,
            SessionState::AwaitingFollowUp => self.handle_follow_up(chat_id, text).await,
        }
    }

    async fn handle_registration(&self, chat_id: i64, text: &str) -> Vec<String> {
        let registration = text.trim().to_uppercase();
        let mut replies = vec![format!("🔍 Fetching MoT history for: {registration}...")];

        let record = match self.records.fetch(&registration).await {
            Ok(record) => record,
            Err(err) => {
                tracing::error!(%registration, error = %err, "vehicle record lookup failed");
                replies.push(NO_HISTORY_MESSAGE.to_string());
                return replies;
            }
        };

        match self.summarizer.generate(&record).await {
            Ok(summary) => {
                replies.push(format!("📌 **MoT Summary:**\n{summary}"));
                self.sessions.with_session(chat_id, |session| {
                    session.last_summary = Some(summary);
                    session.state = SessionState::AwaitingFollowUp;
                });
            }
            Err(err) => {
                tracing::warn!(error = %err, "summary generation failed");
                replies.push(format!("⚠️ Error generating summary: {err}"));
                self.sessions.with_session(chat_id, |session| {
                    session.last_summary = None;
                    session.state = SessionState::AwaitingFollowUp;
                });
            }
        }

        replies.push(FOLLOW_UP_INVITATION.to_string());
        replies
    }

    async fn handle_follow_up(&self, chat_id: i64, text: &str) -> Vec<String> {
        let question = text.trim();

        if question.eq_ignore_ascii_case(EXIT_KEYWORD) {
            self.sessions.with_session(chat_id, |session| session.reset());
            return vec![FAREWELL_MESSAGE.to_string()];
        }

        let summary = self
            .sessions
            .with_session(chat_id, |session| session.last_summary.clone())
            .unwrap_or_else(|| NO_SUMMARY_PLACEHOLDER.to_string());

        match self.summarizer.follow_up(&summary, question).await {
            Ok(answer) => vec![format!("🤖 AI: {answer}")],
            Err(err) => {
                tracing::warn!(error = %err, "follow-up generation failed");
                vec![format!("⚠️ Error generating response: {err}")]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use motbot_types::error::RecordError;
    use motbot_types::llm::{CompletionRequest, CompletionResponse, LlmError, Usage};
    use motbot_types::vehicle::{MotTest, VehicleRecord};

    use crate::summary::{NO_DATA_MESSAGE, SummarizerConfig};

    struct FakeRecords {
        record: Option<VehicleRecord>,
    }

    impl FakeRecords {
        fn found(record: VehicleRecord) -> Self {
            Self {
                record: Some(record),
            }
        }

        fn failing() -> Self {
            Self { record: None }
        }
    }

    impl VehicleRecordSource for FakeRecords {
        async fn fetch(&self, _registration: &str) -> Result<VehicleRecord, RecordError> {
            match &self.record {
                Some(record) => Ok(record.clone()),
                None => Err(RecordError::Transport("connection refused".to_string())),
            }
        }
    }

    struct FakeModel {
        requests: Mutex<Vec<CompletionRequest>>,
        reply: Result<&'static str, &'static str>,
    }

    impl FakeModel {
        fn replying(reply: &'static str) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                reply: Ok(reply),
            }
        }

        fn failing(message: &'static str) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                reply: Err(message),
            }
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn last_request(&self) -> CompletionRequest {
            self.requests.lock().unwrap().last().unwrap().clone()
        }
    }

    impl ChatModel for &FakeModel {
        fn name(&self) -> &str {
            "fake"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            self.requests.lock().unwrap().push(request.clone());
            match self.reply {
                Ok(content) => Ok(CompletionResponse {
                    id: "resp_1".to_string(),
                    content: content.to_string(),
                    model: request.model.clone(),
                    usage: Usage::default(),
                }),
                Err(message) => Err(LlmError::Provider {
                    message: message.to_string(),
                }),
            }
        }
    }

    fn engine<'a>(
        records: FakeRecords,
        model: &'a FakeModel,
    ) -> ConversationEngine<FakeRecords, &'a FakeModel> {
        ConversationEngine::new(records, Summarizer::new(model, SummarizerConfig::default()))
    }

    fn record_with_history() -> VehicleRecord {
        VehicleRecord {
            registration: Some("AB12CDE".to_string()),
            make: Some("FORD".to_string()),
            mot_tests: vec![MotTest {
                test_result: Some("PASSED".to_string()),
                ..MotTest::default()
            }],
            ..VehicleRecord::default()
        }
    }

    #[tokio::test]
    async fn test_failed_lookup_keeps_awaiting_registration() {
        let model = FakeModel::replying("unused");
        let engine = engine(FakeRecords::failing(), &model);

        let replies = engine.handle_message(1, "ab12 cde").await;

        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0], "🔍 Fetching MoT history for: AB12 CDE...");
        assert_eq!(replies[1], NO_HISTORY_MESSAGE);
        assert_eq!(model.request_count(), 0);
        assert_eq!(
            engine.sessions().get(1).unwrap().state,
            SessionState::AwaitingRegistration
        );
    }

    #[tokio::test]
    async fn test_successful_lookup_transitions_to_follow_up() {
        let model = FakeModel::replying("A dependable Ford.");
        let engine = engine(FakeRecords::found(record_with_history()), &model);

        let replies = engine.handle_message(1, "ab12cde").await;

        assert_eq!(replies.len(), 3);
        assert_eq!(replies[1], "📌 **MoT Summary:**\nA dependable Ford.");
        assert_eq!(replies[2], FOLLOW_UP_INVITATION);

        let session = engine.sessions().get(1).unwrap();
        assert_eq!(session.state, SessionState::AwaitingFollowUp);
        assert_eq!(session.last_summary.as_deref(), Some("A dependable Ford."));
    }

    #[tokio::test]
    async fn test_empty_history_stores_no_data_summary_without_generation() {
        let model = FakeModel::replying("unused");
        let engine = engine(FakeRecords::found(VehicleRecord::default()), &model);

        let replies = engine.handle_message(1, "AB12CDE").await;

        assert_eq!(replies[1], format!("📌 **MoT Summary:**\n{NO_DATA_MESSAGE}"));
        assert_eq!(model.request_count(), 0);

        let session = engine.sessions().get(1).unwrap();
        assert_eq!(session.state, SessionState::AwaitingFollowUp);
        assert_eq!(session.last_summary.as_deref(), Some(NO_DATA_MESSAGE));
    }

    #[tokio::test]
    async fn test_generation_failure_enters_follow_up_without_summary() {
        let model = FakeModel::failing("model offline");
        let engine = engine(FakeRecords::found(record_with_history()), &model);

        let replies = engine.handle_message(1, "AB12CDE").await;

        assert_eq!(
            replies[1],
            "⚠️ Error generating summary: provider error: model offline"
        );
        assert_eq!(replies[2], FOLLOW_UP_INVITATION);

        let session = engine.sessions().get(1).unwrap();
        assert_eq!(session.state, SessionState::AwaitingFollowUp);
        assert!(session.last_summary.is_none());
    }

    #[tokio::test]
    async fn test_exit_ends_session_without_generation() {
        let model = FakeModel::replying("A dependable Ford.");
        let engine = engine(FakeRecords::found(record_with_history()), &model);

        engine.handle_message(1, "AB12CDE").await;
        let calls_after_lookup = model.request_count();

        for exit in ["exit", "EXIT", "  Exit  "] {
            // Re-enter follow-up for each variant.
            engine.sessions().with_session(1, |session| {
                session.state = SessionState::AwaitingFollowUp;
            });

            let replies = engine.handle_message(1, exit).await;
            assert_eq!(replies, vec![FAREWELL_MESSAGE.to_string()]);

            let session = engine.sessions().get(1).unwrap();
            assert_eq!(session.state, SessionState::AwaitingRegistration);
            assert!(session.last_summary.is_none());
        }

        assert_eq!(model.request_count(), calls_after_lookup);
    }

    #[tokio::test]
    async fn test_follow_up_answers_against_stored_summary() {
        let model = FakeModel::replying("Only once, for brakes.");
        let engine = engine(FakeRecords::found(record_with_history()), &model);

        engine.handle_message(1, "AB12CDE").await;
        let replies = engine.handle_message(1, "Has it ever failed?").await;

        assert_eq!(replies, vec!["🤖 AI: Only once, for brakes.".to_string()]);
        assert_eq!(
            engine.sessions().get(1).unwrap().state,
            SessionState::AwaitingFollowUp
        );

        let request = model.last_request();
        assert!(request.messages[0].content.contains("Has it ever failed?"));
        assert_eq!(request.max_tokens, 500);
    }

    #[tokio::test]
    async fn test_follow_up_without_summary_embeds_placeholder() {
        let model = FakeModel::replying("I have no record of that.");
        let engine = engine(FakeRecords::failing(), &model);

        engine.sessions().with_session(1, |session| {
            session.state = SessionState::AwaitingFollowUp;
        });

        let replies = engine.handle_message(1, "Is it reliable?").await;
        assert_eq!(replies, vec!["🤖 AI: I have no record of that.".to_string()]);

        let request = model.last_request();
        assert!(request.messages[0].content.contains(NO_SUMMARY_PLACEHOLDER));
    }

    #[tokio::test]
    async fn test_follow_up_generation_failure_is_rendered_inline() {
        let model = FakeModel::failing("rate limited");
        let engine = engine(FakeRecords::failing(), &model);

        engine.sessions().with_session(1, |session| {
            session.state = SessionState::AwaitingFollowUp;
            session.last_summary = Some("A dependable Ford.".to_string());
        });

        let replies = engine.handle_message(1, "Is it reliable?").await;
        assert_eq!(
            replies,
            vec!["⚠️ Error generating response: provider error: rate limited".to_string()]
        );
        assert_eq!(
            engine.sessions().get(1).unwrap().state,
            SessionState::AwaitingFollowUp
        );
    }

    #[tokio::test]
    async fn test_start_command_is_treated_as_registration() {
        let model = FakeModel::replying("unused");
        let engine = engine(FakeRecords::failing(), &model);

        let replies = engine.handle_message(1, "/start").await;
        assert_eq!(replies[0], "🔍 Fetching MoT history for: /START...");
        assert_eq!(replies[1], NO_HISTORY_MESSAGE);
    }
}
