//! Anthropic Messages API client

use std::collections::HashMap;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use super::MessagesApi;
use super::errors::error_from_response;
use super::headers::build_headers;
use crate::error::ExchangeError;
use crate::types::{MessagesRequest, MessagesResponse};

const PROVIDER: &str = "anthropic";

/// HTTP client for `POST /v1/messages`. Construct with
/// [`AnthropicBuilder`](super::AnthropicBuilder).
pub struct AnthropicClient {
    api_key: SecretString,
    base_url: String,
    http_client: reqwest::Client,
    custom_headers: HashMap<String, String>,
}

impl std::fmt::Debug for AnthropicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicClient")
            .field("provider_name", &PROVIDER)
            .field("base_url", &self.base_url)
            .field("custom_headers", &self.custom_headers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl AnthropicClient {
    pub fn new(
        api_key: SecretString,
        base_url: String,
        http_client: reqwest::Client,
        custom_headers: HashMap<String, String>,
    ) -> Self {
        Self {
            api_key,
            base_url,
            http_client,
            custom_headers,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

#[async_trait]
impl MessagesApi for AnthropicClient {
    async fn create_message(
        &self,
        request: &MessagesRequest,
    ) -> Result<MessagesResponse, ExchangeError> {
        let url = self.messages_url();
        let headers = build_headers(self.api_key.expose_secret(), &self.custom_headers)?;

        tracing::debug!(
            url = %url,
            model = %request.model,
            turns = request.messages.len(),
            tools = request.tools.len(),
            "POST messages"
        );

        let resp = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), body = %text, "messages request failed");
            return Err(error_from_response(PROVIDER, status.as_u16(), &text));
        }

        let response: MessagesResponse = serde_json::from_str(&text)
            .map_err(|e| ExchangeError::ParseError(format!("Invalid Anthropic response: {e}")))?;

        tracing::debug!(
            id = %response.id,
            stop_reason = ?response.stop_reason,
            blocks = response.content.as_ref().map_or(0, Vec::len),
            input_tokens = response.usage.as_ref().map(|u| u.input_tokens),
            output_tokens = response.usage.as_ref().map(|u| u.output_tokens),
            "messages response received"
        );
        Ok(response)
    }
}
