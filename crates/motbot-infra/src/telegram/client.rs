//! TelegramClient -- minimal Bot API transport.
//!
//! Long polling via `getUpdates` plus outbound `sendMessage`. The bot token
//! is part of every request URL, so the client never logs request URLs and
//! does not derive Debug.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use motbot_types::error::TelegramError;

use super::types::{ApiResponse, Update};

/// Default base URL of the Telegram Bot API.
pub const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

/// Extra headroom on the HTTP timeout so it outlasts the long-poll hold.
const POLL_TIMEOUT_MARGIN_SECS: u64 = 10;

/// Telegram Bot API client.
pub struct TelegramClient {
    client: reqwest::Client,
    token: SecretString,
    base_url: String,
    poll_timeout_secs: u64,
}

#[derive(Serialize)]
struct GetUpdatesParams {
    offset: i64,
    timeout: u64,
}

#[derive(Serialize)]
struct SendMessageParams<'a> {
    chat_id: i64,
    text: &'a str,
}

impl TelegramClient {
    pub fn new(token: SecretString, poll_timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(
                poll_timeout_secs + POLL_TIMEOUT_MARGIN_SECS,
            ))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            token,
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_timeout_secs,
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{method}",
            self.base_url,
            self.token.expose_secret()
        )
    }

    /// Long-poll for updates past `offset`.
    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>, TelegramError> {
        let params = GetUpdatesParams {
            offset,
            timeout: self.poll_timeout_secs,
        };

        let parsed: ApiResponse<Vec<Update>> =
            self.call("getUpdates", &params).await?;
        Ok(parsed.result.unwrap_or_default())
    }

    /// Send a plain-text reply to a chat.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), TelegramError> {
        let params = SendMessageParams { chat_id, text };
        self.call::<_, serde_json::Value>("sendMessage", &params)
            .await?;
        Ok(())
    }

    async fn call<P: Serialize, T: serde::de::DeserializeOwned + Default>(
        &self,
        method: &str,
        params: &P,
    ) -> Result<ApiResponse<T>, TelegramError> {
        let response = self
            .client
            .post(self.method_url(method))
            .json(params)
            .send()
            .await
            .map_err(|e| TelegramError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TelegramError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| TelegramError::Decode(e.to_string()))?;

        if !parsed.ok {
            return Err(TelegramError::Api(
                parsed
                    .description
                    .unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_url_embeds_token() {
        let client = TelegramClient::new(SecretString::from("123:abc"), 30);
        assert_eq!(
            client.method_url("getUpdates"),
            "https://api.telegram.org/bot123:abc/getUpdates"
        );
    }

    #[test]
    fn test_base_url_override() {
        let client = TelegramClient::new(SecretString::from("123:abc"), 30)
            .with_base_url("http://localhost:8081".to_string());
        assert_eq!(
            client.method_url("sendMessage"),
            "http://localhost:8081/bot123:abc/sendMessage"
        );
    }
}
