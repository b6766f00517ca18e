//! TokenClient -- OAuth2 client-credentials exchange for the MoT history API.
//!
//! One form-encoded POST per call. The trade API hands out short-lived
//! bearer tokens and this client performs a full exchange on every record
//! fetch; there is no caching or reuse.
//!
//! The client secret is wrapped in [`secrecy::SecretString`] and only
//! exposed while building the form body.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use motbot_types::error::TokenError;

/// Bearer token returned by the token endpoint.
#[derive(Debug, Clone)]
pub struct AccessToken(String);

impl AccessToken {
    /// The raw bearer string, for the Authorization header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

/// OAuth2 client-credentials token client.
// Does not derive Debug: holds the client secret.
pub struct TokenClient {
    client: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: SecretString,
    scope: String,
}

impl TokenClient {
    pub fn new(
        token_url: String,
        client_id: String,
        client_secret: SecretString,
        scope: String,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            token_url,
            client_id,
            client_secret,
            scope,
        }
    }

    /// Exchange client credentials for a bearer token.
    ///
    /// No retry, no backoff; any failure is logged and surfaced as a typed
    /// [`TokenError`].
    pub async fn acquire(&self) -> Result<AccessToken, TokenError> {
        let form = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.expose_secret()),
            ("scope", self.scope.as_str()),
            ("grant_type", "client_credentials"),
        ];

        let response = self
            .client
            .post(&self.token_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "token request failed");
                TokenError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "token endpoint rejected the exchange");
            return Err(TokenError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: TokenResponse = response
            .json()
            .await
            .map_err(|e| TokenError::Decode(e.to_string()))?;

        parsed
            .access_token
            .map(AccessToken)
            .ok_or(TokenError::MissingAccessToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_exposes_raw_string() {
        let token = AccessToken("abc123".to_string());
        assert_eq!(token.as_str(), "abc123");
    }

    #[test]
    fn test_token_response_tolerates_missing_field() {
        let parsed: TokenResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.access_token.is_none());

        let parsed: TokenResponse =
            serde_json::from_str(r#"{"access_token":"tok","expires_in":3600}"#).unwrap();
        assert_eq!(parsed.access_token.as_deref(), Some("tok"));
    }
}
