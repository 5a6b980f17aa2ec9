use std::collections::HashMap;
use std::time::Duration;

use secrecy::SecretString;

use super::AnthropicClient;
use crate::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ExchangeConfig};
use crate::error::ExchangeError;

/// Builder for [`AnthropicClient`].
///
/// The API key falls back to `ANTHROPIC_API_KEY` when not set explicitly.
#[derive(Default)]
pub struct AnthropicBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
    custom_headers: HashMap<String, String>,
}

impl AnthropicBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed base URL and timeout from an [`ExchangeConfig`].
    pub fn from_config(config: &ExchangeConfig) -> Self {
        Self::new()
            .base_url(config.base_url.clone())
            .timeout(config.timeout)
    }

    /// Sets the API key
    pub fn api_key<S: Into<String>>(mut self, key: S) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the base URL
    pub fn base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Per-request timeout. Ignored when a custom HTTP client is supplied.
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a preconfigured reqwest client
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Adds a header sent with every request (e.g. `anthropic-beta`).
    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.custom_headers.insert(key.into(), value.into());
        self
    }

    /// Builds the Anthropic client
    pub fn build(self) -> Result<AnthropicClient, ExchangeError> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                std::env::var("ANTHROPIC_API_KEY")
                    .ok()
                    .filter(|k| !k.trim().is_empty())
            })
            .ok_or_else(|| {
                ExchangeError::MissingApiKey("Anthropic API key not provided".to_string())
            })?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let http_client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
                .build()
                .map_err(|e| {
                    ExchangeError::ConfigurationError(format!("Failed to build HTTP client: {e}"))
                })?,
        };

        Ok(AnthropicClient::new(
            SecretString::from(api_key),
            base_url,
            http_client,
            self.custom_headers,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_key_and_trailing_slash() {
        let client = AnthropicBuilder::new()
            .api_key("test-key")
            .base_url("http://localhost:9999/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:9999");
        assert_eq!(client.messages_url(), "http://localhost:9999/v1/messages");
    }

    #[test]
    fn debug_output_masks_api_key() {
        let client = AnthropicBuilder::new().api_key("sk-secret").build().unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("sk-secret"));
    }
}
