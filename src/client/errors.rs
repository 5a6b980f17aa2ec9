//! Mapping of non-success Messages API responses onto [`ExchangeError`].

use serde::Deserialize;
use serde_json::Value;

use crate::error::ExchangeError;

/// `{ "type": "error", "error": { "type": "...", "message": "..." } }`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    message: Option<String>,
}

/// Turn a failed response into an error variant.
///
/// Bodies carrying the Anthropic error envelope are mapped by error type;
/// anything else becomes an `ApiError` with the HTTP status.
pub fn error_from_response(provider: &str, status: u16, body_text: &str) -> ExchangeError {
    let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body_text) else {
        let message = if body_text.trim().is_empty() {
            format!("{provider} returned HTTP {status}")
        } else {
            body_text.to_string()
        };
        return ExchangeError::ApiError {
            code: status,
            message,
            details: None,
        };
    };

    let ErrorBody { kind, message } = envelope.error;
    let message = message.unwrap_or_else(|| format!("HTTP {status}"));

    match kind.as_str() {
        "authentication_error" => ExchangeError::AuthenticationError(message),
        "permission_error" => ExchangeError::AuthenticationError(format!("permission denied: {message}")),
        "rate_limit_error" => ExchangeError::RateLimitError(message),
        "not_found_error" => ExchangeError::NotFound(message),
        "invalid_request_error" | "request_too_large" => ExchangeError::InvalidInput(message),
        _ => {
            // overloaded_error arrives as 529; keep the status the server chose
            let details = serde_json::from_str::<Value>(body_text).ok();
            ExchangeError::ApiError {
                code: status,
                message: format!("{provider} {kind}: {message}"),
                details,
            }
        }
    }
}
