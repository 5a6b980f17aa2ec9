//! Core error types for the exchange and its collaborators.

use thiserror::Error;

/// Errors that abort an exchange.
///
/// Transport and protocol failures surface here. Capability-level failures
/// (unknown capability, bad arguments) never do: they are folded back into the
/// conversation as error results, see [`CapabilityError`].
#[derive(Error, Debug, Clone)]
pub enum ExchangeError {
    /// The remote service could not be reached (connect, TLS, I/O).
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The remote call did not finish within the configured timeout.
    #[error("Timeout error: {0}")]
    TimeoutError(String),

    /// The remote service answered with a non-success status.
    #[error("API error {code}: {message}")]
    ApiError {
        code: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Credentials were rejected.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// Too many requests.
    #[error("Rate limit error: {0}")]
    RateLimitError(String),

    /// The request itself was rejected as invalid.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Model or endpoint not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The response parsed but lacks something the exchange relies on
    /// (no content blocks, unrecognized stop reason, tool_use without blocks).
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The response body could not be decoded.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// JSON (de)serialization failure outside of response decoding.
    #[error("JSON error: {0}")]
    JsonError(String),

    /// No API key in the builder or the environment.
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Coarse grouping used for user-facing summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Authentication,
    RateLimit,
    Client,
    Server,
    Parsing,
    Configuration,
}

impl ExchangeError {
    /// Create an API error from a status code and message.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// HTTP status associated with the error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            Self::AuthenticationError(_) => Some(401),
            Self::RateLimitError(_) => Some(429),
            Self::NotFound(_) => Some(404),
            Self::InvalidInput(_) => Some(400),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) | Self::TimeoutError(_) => ErrorCategory::Network,
            Self::AuthenticationError(_) => ErrorCategory::Authentication,
            Self::RateLimitError(_) => ErrorCategory::RateLimit,
            Self::InvalidInput(_) | Self::NotFound(_) => ErrorCategory::Client,
            Self::ApiError { code, .. } => match *code {
                401 | 403 => ErrorCategory::Authentication,
                429 => ErrorCategory::RateLimit,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Client,
            },
            Self::MalformedResponse(_) | Self::ParseError(_) | Self::JsonError(_) => {
                ErrorCategory::Parsing
            }
            Self::MissingApiKey(_) | Self::ConfigurationError(_) => ErrorCategory::Configuration,
        }
    }

    /// Whether a caller could reasonably try again. The exchange itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Network | ErrorCategory::RateLimit | ErrorCategory::Server
        )
    }
}

/// Capability-level failures. Recovered locally into an error result that is
/// sent back to the remote service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    /// The remote service requested a capability that is not registered.
    #[error("Unknown capability: {0}")]
    UnknownCapability(String),

    /// Arguments are missing, mistyped, or out of range.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}
