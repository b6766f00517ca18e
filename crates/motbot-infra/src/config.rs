//! Startup configuration loading.
//!
//! Credentials come from environment variables; tunables from an optional
//! `motbot.toml`. A missing or malformed tunables file falls back to
//! defaults; a missing `TELEGRAM_BOT_TOKEN` is the one fatal startup
//! condition.

use std::path::Path;

use secrecy::SecretString;

use motbot_types::config::{Settings, Tunables};
use motbot_types::error::ConfigError;

/// Environment variable holding the Telegram bot token (required).
pub const TELEGRAM_BOT_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";

/// Load tunables from `path`.
///
/// - If the file does not exist, returns [`Tunables::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
pub async fn load_tunables(path: &Path) -> Tunables {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Tunables::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return Tunables::default();
        }
    };

    match toml::from_str::<Tunables>(&content) {
        Ok(tunables) => tunables,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            Tunables::default()
        }
    }
}

/// Assemble startup settings from the environment plus `tunables`.
///
/// Only the bot token is required. Every other credential defaults to empty
/// with a warning; the affected request path then fails through its ordinary
/// user-visible surface instead of preventing startup.
pub fn settings_from_env(tunables: Tunables) -> Result<Settings, ConfigError> {
    let telegram_bot_token = require_var(TELEGRAM_BOT_TOKEN_VAR)?;

    Ok(Settings {
        telegram_bot_token: SecretString::from(telegram_bot_token),
        token_url: optional_var("MOT_TOKEN_URL"),
        client_id: optional_var("MOT_CLIENT_ID"),
        client_secret: SecretString::from(optional_var("MOT_CLIENT_SECRET")),
        scope_url: optional_var("MOT_SCOPE_URL"),
        mot_api_key: SecretString::from(optional_var("MOT_API_KEY")),
        openai_api_key: SecretString::from(optional_var("OPENAI_API_KEY")),
        tunables,
    })
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name.to_string())),
    }
}

fn optional_var(name: &str) -> String {
    match std::env::var(name) {
        Ok(value) => value,
        Err(std::env::VarError::NotPresent) => {
            tracing::warn!("{name} is not set; related requests will fail");
            String::new()
        }
        Err(std::env::VarError::NotUnicode(_)) => {
            // Credentials must be valid strings; treat as unset.
            tracing::warn!("{name} is not valid unicode; treating as unset");
            String::new()
        }
    }
}
