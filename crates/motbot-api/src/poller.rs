//! Telegram long-polling loop.
//!
//! Updates are processed sequentially in arrival order, which serializes
//! per-chat handling without any locking. A failed poll is logged and the
//! loop continues after a short pause; a failed send is logged and the
//! remaining replies are still attempted.

use std::time::Duration;

use motbot_core::conversation::ConversationEngine;
use motbot_core::llm::ChatModel;
use motbot_core::record::VehicleRecordSource;
use motbot_infra::telegram::TelegramClient;

/// Pause before re-polling after a transport failure.
const POLL_RETRY_PAUSE: Duration = Duration::from_secs(3);

/// Poll for updates indefinitely, dispatching each text message through the
/// conversation engine.
///
/// Non-text and non-message updates are skipped, but their offsets are still
/// advanced so they are not re-delivered.
pub async fn run<R, M>(telegram: &TelegramClient, engine: &ConversationEngine<R, M>)
where
    R: VehicleRecordSource,
    M: ChatModel,
{
    let mut offset = 0i64;

    loop {
        let updates = match telegram.get_updates(offset).await {
            Ok(updates) => updates,
            Err(err) => {
                tracing::warn!(error = %err, "getUpdates failed");
                tokio::time::sleep(POLL_RETRY_PAUSE).await;
                continue;
            }
        };

        for update in updates {
            offset = offset.max(update.update_id + 1);

            let Some(incoming) = update.message else {
                continue;
            };
            let Some(text) = incoming.text else {
                continue;
            };

            let replies = engine.handle_message(incoming.chat.id, &text).await;
            for reply in replies {
                if let Err(err) = telegram.send_message(incoming.chat.id, &reply).await {
                    tracing::error!(chat_id = incoming.chat.id, error = %err, "sendMessage failed");
                }
            }
        }
    }
}
