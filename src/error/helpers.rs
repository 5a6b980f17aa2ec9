//! User-facing error summaries for CLI rendering.

use super::types::{ErrorCategory, ExchangeError};

/// Structured error summary for CLI consumption
#[derive(Debug, Clone)]
pub struct ErrorSummary {
    pub category: ErrorCategory,
    pub status: Option<u16>,
    pub message: String,
    pub details: Option<serde_json::Value>,
    pub suggestions: Vec<String>,
}

/// Summarize an ExchangeError with friendly suggestions.
pub fn summarize_error(err: &ExchangeError) -> ErrorSummary {
    ErrorSummary {
        category: err.category(),
        status: err.status_code(),
        message: extract_raw_message(err),
        details: match err {
            ExchangeError::ApiError { details, .. } => details.clone(),
            _ => None,
        },
        suggestions: suggest_fixes(err),
    }
}

fn extract_raw_message(err: &ExchangeError) -> String {
    match err {
        ExchangeError::ApiError { message, .. } => message.clone(),
        ExchangeError::AuthenticationError(msg)
        | ExchangeError::RateLimitError(msg)
        | ExchangeError::TimeoutError(msg)
        | ExchangeError::HttpError(msg)
        | ExchangeError::MalformedResponse(msg)
        | ExchangeError::InvalidInput(msg) => msg.clone(),
        _ => err.to_string(),
    }
}

pub fn suggest_fixes(err: &ExchangeError) -> Vec<String> {
    let mut tips = Vec::new();
    match err.category() {
        ErrorCategory::Authentication => {
            tips.push("Verify ANTHROPIC_API_KEY".to_string());
        }
        ErrorCategory::RateLimit => {
            tips.push("Wait and run the query again".to_string());
        }
        ErrorCategory::Network => {
            tips.push("Check network access to the API base URL".to_string());
            tips.push("Raise --timeout-secs if the model is slow to answer".to_string());
        }
        ErrorCategory::Client => {
            tips.push("Check the model name and request parameters".to_string());
        }
        ErrorCategory::Server => {
            tips.push("Provider server error; try again later".to_string());
        }
        ErrorCategory::Parsing => {
            tips.push("The API answered with an unexpected shape; rerun with debug logging".to_string());
        }
        ErrorCategory::Configuration => {
            tips.push("Check environment variables and the .env file".to_string());
        }
    }
    tips
}

/// Render a CLI-friendly string for ErrorSummary.
pub fn format_summary(summary: &ErrorSummary, verbose: bool) -> String {
    let mut out = String::new();
    if let Some(code) = summary.status {
        out.push_str(&format!("Status: {code}\n"));
    }
    out.push_str(&format!("Message: {}\n", summary.message));
    if !summary.suggestions.is_empty() {
        out.push_str("Suggestions:\n");
        for s in &summary.suggestions {
            out.push_str(&format!("  - {s}\n"));
        }
    }
    if verbose && let Some(d) = &summary.details {
        out.push_str(&format!("Details: {d}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_includes_status_and_suggestions() {
        let e = ExchangeError::api_error(401, "unauthorized");
        let s = summarize_error(&e);
        assert_eq!(s.status, Some(401));
        assert_eq!(s.category, ErrorCategory::Authentication);
        assert!(!s.suggestions.is_empty());

        let rendered = format_summary(&s, false);
        assert!(rendered.contains("Status: 401"));
        assert!(rendered.contains("Message: unauthorized"));
    }

    #[test]
    fn verbose_summary_renders_details() {
        let e = ExchangeError::ApiError {
            code: 500,
            message: "boom".into(),
            details: Some(serde_json::json!({"type": "api_error"})),
        };
        let rendered = format_summary(&summarize_error(&e), true);
        assert!(rendered.contains("Details:"));
    }
}
