use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }
}

/// Why a player lookup could not produce a result.
///
/// Only the identity stage can fail a lookup with one of the HTTP kinds;
/// later stages fall back to defaults and never surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupFailure {
    #[error("player not found")]
    NotFound,

    #[error("API key expired")]
    AuthExpired,

    #[error("API key forbidden")]
    AuthForbidden,

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("no response from the API")]
    Transport,

    #[error("internal error: {0}")]
    Internal(String),
}

impl LookupFailure {
    /// Classifies a non-200 status from the identity lookup.
    /// Status 0 means no response was obtained at all.
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => Self::NotFound,
            401 => Self::AuthExpired,
            403 => Self::AuthForbidden,
            429 => Self::RateLimited,
            _ => Self::Transport,
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Short, non-technical message shown to whoever ran the command.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound => "Player not found.".to_string(),
            Self::AuthExpired => "API key expired.".to_string(),
            Self::AuthForbidden => "API key blocked.".to_string(),
            Self::RateLimited => "Rate limit exceeded, try again in a moment.".to_string(),
            Self::Transport => "Connection error.".to_string(),
            Self::Internal(detail) => format!("Internal error: {detail}"),
        }
    }
}

/// Failure below the HTTP layer: no status code was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request timed out: {url}")]
    Timeout { url: String },

    #[error("connection failed to {url}: {message}")]
    Connect { url: String, message: String },

    #[error("failed to read response body from {url}: {message}")]
    Body { url: String, message: String },

    #[error("response from {url} is not valid JSON: {message}")]
    Decode { url: String, message: String },

    #[error("request to {url} failed: {message}")]
    Other { url: String, message: String },
}

impl TransportError {
    /// Maps a reqwest error raised before a status code arrived.
    pub fn from_reqwest(url: &str, err: &reqwest::Error) -> Self {
        let url = url.to_string();
        if err.is_timeout() {
            Self::Timeout { url }
        } else if err.is_connect() {
            Self::Connect {
                url,
                message: err.to_string(),
            }
        } else if err.is_body() || err.is_decode() {
            Self::Body {
                url,
                message: err.to_string(),
            }
        } else {
            Self::Other {
                url,
                message: err.to_string(),
            }
        }
    }
}
