use thiserror::Error;

/// Errors from the OAuth2 client-credentials token exchange.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token request failed: {0}")]
    Transport(String),

    #[error("token endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("token response missing 'access_token'")]
    MissingAccessToken,

    #[error("malformed token response: {0}")]
    Decode(String),
}

/// Errors from fetching a vehicle's MoT history.
///
/// Token failure is folded in here: the caller sees one failure surface for
/// the whole lookup, and the user-visible outcome does not distinguish the
/// two.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("token acquisition failed: {0}")]
    Token(#[from] TokenError),

    #[error("record request failed: {0}")]
    Transport(String),

    #[error("record endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed record response: {0}")]
    Decode(String),
}

/// Errors from the Telegram Bot API transport.
#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("telegram request failed: {0}")]
    Transport(String),

    #[error("telegram returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("telegram rejected the call: {0}")]
    Api(String),

    #[error("malformed telegram response: {0}")]
    Decode(String),
}

/// Errors raised while assembling startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable '{0}'")]
    MissingVar(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_error_display() {
        let err = TokenError::Status {
            status: 401,
            body: "invalid_client".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "token endpoint returned HTTP 401: invalid_client"
        );
    }

    #[test]
    fn test_record_error_wraps_token_error() {
        let err = RecordError::from(TokenError::MissingAccessToken);
        assert!(err.to_string().contains("token acquisition failed"));
        assert!(err.to_string().contains("access_token"));
    }

    #[test]
    fn test_telegram_error_display() {
        let err = TelegramError::Api("chat not found".to_string());
        assert_eq!(err.to_string(), "telegram rejected the call: chat not found");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingVar("TELEGRAM_BOT_TOKEN".to_string());
        assert!(err.to_string().contains("TELEGRAM_BOT_TOKEN"));
    }
}
