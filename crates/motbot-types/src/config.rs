//! Startup configuration types.
//!
//! `Tunables` is the optional `motbot.toml`: model selection, sampling
//! settings, output caps, and base-URL overrides. All fields have defaults.
//! `Settings` is the fully resolved startup configuration, combining the
//! tunables with credentials read from the environment.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Tunable settings loaded from `motbot.toml`. All fields have defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tunables {
    /// Chat model identifier sent to the generation service.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature for both summary and follow-up completions.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Output cap for the initial summary completion.
    #[serde(default = "default_summary_max_tokens")]
    pub summary_max_tokens: u32,

    /// Output cap for follow-up completions.
    #[serde(default = "default_follow_up_max_tokens")]
    pub follow_up_max_tokens: u32,

    /// Long-poll hold for Telegram getUpdates, in seconds.
    #[serde(default = "default_poll_timeout_secs")]
    pub poll_timeout_secs: u64,

    /// Base URL of the MoT history trade API.
    #[serde(default = "default_mot_base_url")]
    pub mot_base_url: String,

    /// Override for the generation-service base URL (e.g. a proxy).
    #[serde(default)]
    pub openai_base_url: Option<String>,
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f64 {
    0.5
}

fn default_summary_max_tokens() -> u32 {
    1000
}

fn default_follow_up_max_tokens() -> u32 {
    500
}

fn default_poll_timeout_secs() -> u64 {
    30
}

fn default_mot_base_url() -> String {
    "https://history.mot.api.gov.uk".to_string()
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            summary_max_tokens: default_summary_max_tokens(),
            follow_up_max_tokens: default_follow_up_max_tokens(),
            poll_timeout_secs: default_poll_timeout_secs(),
            mot_base_url: default_mot_base_url(),
            openai_base_url: None,
        }
    }
}

/// Fully resolved startup configuration: environment credentials plus
/// tunables.
///
/// Credential fields are wrapped in `SecretString`, whose `Debug` impl
/// redacts their contents, so deriving `Debug` does not expose secrets.
#[derive(Debug)]
pub struct Settings {
    pub telegram_bot_token: SecretString,
    pub token_url: String,
    pub client_id: String,
    pub client_secret: SecretString,
    pub scope_url: String,
    pub mot_api_key: SecretString,
    pub openai_api_key: SecretString,
    pub tunables: Tunables,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tunables_default_values() {
        let tunables = Tunables::default();
        assert_eq!(tunables.model, "gpt-4o-mini");
        assert!((tunables.temperature - 0.5).abs() < f64::EPSILON);
        assert_eq!(tunables.summary_max_tokens, 1000);
        assert_eq!(tunables.follow_up_max_tokens, 500);
        assert_eq!(tunables.poll_timeout_secs, 30);
        assert_eq!(tunables.mot_base_url, "https://history.mot.api.gov.uk");
        assert!(tunables.openai_base_url.is_none());
    }

    #[test]
    fn test_tunables_deserialize_empty_toml_uses_defaults() {
        let tunables: Tunables = toml::from_str("").unwrap();
        assert_eq!(tunables.model, "gpt-4o-mini");
        assert_eq!(tunables.summary_max_tokens, 1000);
    }

    #[test]
    fn test_tunables_deserialize_with_values() {
        let toml_str = r#"
model = "gpt-4o"
temperature = 0.2
follow_up_max_tokens = 256
openai_base_url = "http://localhost:8080/v1"
"#;
        let tunables: Tunables = toml::from_str(toml_str).unwrap();
        assert_eq!(tunables.model, "gpt-4o");
        assert!((tunables.temperature - 0.2).abs() < f64::EPSILON);
        assert_eq!(tunables.follow_up_max_tokens, 256);
        // Unset fields still default.
        assert_eq!(tunables.summary_max_tokens, 1000);
        assert_eq!(
            tunables.openai_base_url.as_deref(),
            Some("http://localhost:8080/v1")
        );
    }
}
