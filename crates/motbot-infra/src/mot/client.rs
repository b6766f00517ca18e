//! MotHistoryClient -- [`VehicleRecordSource`] implementation over the DVSA
//! trade API.
//!
//! Performs a fresh token exchange per fetch, then a bearer-authenticated
//! GET with the trade API key header. The registration is inserted into the
//! path verbatim; the response is parsed tolerantly, so missing fields
//! surface as placeholders downstream rather than as errors here.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use motbot_core::record::VehicleRecordSource;
use motbot_types::error::RecordError;
use motbot_types::vehicle::VehicleRecord;

use crate::auth::TokenClient;

/// Default base URL of the MoT history trade API.
pub const DEFAULT_BASE_URL: &str = "https://history.mot.api.gov.uk";

/// DVSA MoT history client.
// Does not derive Debug: holds the trade API key.
pub struct MotHistoryClient {
    client: reqwest::Client,
    tokens: TokenClient,
    api_key: SecretString,
    base_url: String,
}

impl MotHistoryClient {
    pub fn new(tokens: TokenClient, api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            tokens,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn registration_url(&self, registration: &str) -> String {
        format!(
            "{}/v1/trade/vehicles/registration/{registration}",
            self.base_url
        )
    }
}

impl VehicleRecordSource for MotHistoryClient {
    async fn fetch(&self, registration: &str) -> Result<VehicleRecord, RecordError> {
        let token = self.tokens.acquire().await?;

        let response = self
            .client
            .get(self.registration_url(registration))
            .bearer_auth(token.as_str())
            .header("Accept", "application/json")
            .header("X-Api-Key", self.api_key.expose_secret())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(%registration, error = %e, "vehicle record request failed");
                RecordError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                %registration,
                "vehicle record request rejected"
            );
            return Err(RecordError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<VehicleRecord>()
            .await
            .map_err(|e| RecordError::Decode(e.to_string()))
    }
}
