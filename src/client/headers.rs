use std::collections::HashMap;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::error::ExchangeError;

pub const ANTHROPIC_VERSION: &str = "2023-06-01";

fn header_value(name: &str, value: &str) -> Result<HeaderValue, ExchangeError> {
    HeaderValue::from_str(value)
        .map_err(|e| ExchangeError::ConfigurationError(format!("invalid value for header {name}: {e}")))
}

pub fn build_headers(
    api_key: &str,
    custom_headers: &HashMap<String, String>,
) -> Result<HeaderMap, ExchangeError> {
    let mut headers = HeaderMap::new();
    let mut key = header_value("x-api-key", api_key)?;
    key.set_sensitive(true);
    headers.insert("x-api-key", key);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert("anthropic-version", HeaderValue::from_static(ANTHROPIC_VERSION));

    for (k, v) in custom_headers {
        let name = HeaderName::from_bytes(k.as_bytes()).map_err(|e| {
            ExchangeError::ConfigurationError(format!("invalid header name {k}: {e}"))
        })?;
        headers.insert(name, header_value(k, v)?);
    }
    Ok(headers)
}

#[cfg(test)]
mod header_tests {
    use super::*;

    #[test]
    fn build_headers_includes_required_anthropic_headers() {
        let headers = build_headers("k", &HashMap::new()).unwrap();
        assert_eq!(
            headers.get("x-api-key").and_then(|v| v.to_str().ok()),
            Some("k")
        );
        assert!(headers.contains_key("anthropic-version"));
        assert_eq!(
            headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    #[test]
    fn build_headers_appends_custom_headers() {
        let mut custom = HashMap::new();
        custom.insert("anthropic-beta".to_string(), "feature-a".to_string());
        let headers = build_headers("k", &custom).unwrap();
        assert_eq!(
            headers.get("anthropic-beta").and_then(|v| v.to_str().ok()),
            Some("feature-a")
        );
    }

    #[test]
    fn build_headers_rejects_invalid_api_key() {
        assert!(matches!(
            build_headers("bad\nkey", &HashMap::new()),
            Err(ExchangeError::ConfigurationError(_))
        ));
    }
}
