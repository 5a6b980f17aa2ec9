//! Messages API request and response types
//!
//! Content blocks are closed tagged enums: a response can only carry text or
//! tool-use blocks, a request may additionally carry tool results. Anything
//! else fails to decode instead of being probed at runtime.

use serde::{Deserialize, Serialize};

use super::tools::CapabilitySpec;
use crate::error::ExchangeError;

/// Conversational role of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A capability invocation requested by the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolUse {
    /// Correlation id; echoed back as `tool_use_id` in the result block.
    pub id: String,
    pub name: String,
    pub input: serde_json::Value,
}

/// A serialized capability result correlated with a [`ToolUse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub tool_use_id: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

/// Content block as returned by the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseBlock {
    Text { text: String },
    ToolUse(ToolUse),
}

/// Content block as sent to the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
    ToolUse(ToolUse),
    ToolResult(ToolResult),
}

impl From<ResponseBlock> for ContentBlock {
    fn from(block: ResponseBlock) -> Self {
        match block {
            ResponseBlock::Text { text } => ContentBlock::Text { text },
            ResponseBlock::ToolUse(call) => ContentBlock::ToolUse(call),
        }
    }
}

/// Turn content: plain text or structured blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

/// One conversational turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: MessageContent,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text(text.into()),
        }
    }

    /// Replay an assistant response verbatim.
    pub fn assistant(blocks: &[ResponseBlock]) -> Self {
        Self {
            role: Role::Assistant,
            content: MessageContent::Blocks(blocks.iter().cloned().map(Into::into).collect()),
        }
    }

    /// A user turn carrying capability results.
    pub fn tool_results(results: Vec<ToolResult>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Blocks(
                results.into_iter().map(ContentBlock::ToolResult).collect(),
            ),
        }
    }

    /// Text of the turn, if it is plain text.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            MessageContent::Text(t) => Some(t),
            MessageContent::Blocks(_) => None,
        }
    }
}

/// Why the remote service stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    EndTurn,
    MaxTokens,
    StopSequence,
    ToolUse,
    Refusal,
}

impl StopReason {
    pub fn parse(reason: &str) -> Option<Self> {
        match reason {
            "end_turn" => Some(Self::EndTurn),
            "max_tokens" => Some(Self::MaxTokens),
            "stop_sequence" => Some(Self::StopSequence),
            "tool_use" => Some(Self::ToolUse),
            "refusal" => Some(Self::Refusal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EndTurn => "end_turn",
            Self::MaxTokens => "max_tokens",
            Self::StopSequence => "stop_sequence",
            Self::ToolUse => "tool_use",
            Self::Refusal => "refusal",
        }
    }

    /// True when the model asked for a capability invocation.
    pub fn requests_invocation(&self) -> bool {
        matches!(self, Self::ToolUse)
    }
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /v1/messages`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<CapabilitySpec>,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: u32,
    #[serde(default)]
    pub output_tokens: u32,
}

/// Decoded Messages API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub content: Option<Vec<ResponseBlock>>,
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl MessagesResponse {
    /// Content blocks, or `MalformedResponse` when there are none.
    pub fn blocks(&self) -> Result<&[ResponseBlock], ExchangeError> {
        match self.content.as_deref() {
            Some(blocks) if !blocks.is_empty() => Ok(blocks),
            _ => Err(ExchangeError::MalformedResponse(format!(
                "response {} has no content blocks",
                self.id
            ))),
        }
    }

    /// Parsed stop reason, or `MalformedResponse` when missing or unrecognized.
    pub fn stop_reason(&self) -> Result<StopReason, ExchangeError> {
        let raw = self.stop_reason.as_deref().ok_or_else(|| {
            ExchangeError::MalformedResponse(format!("response {} has no stop_reason", self.id))
        })?;
        StopReason::parse(raw).ok_or_else(|| {
            ExchangeError::MalformedResponse(format!("unrecognized stop_reason: {raw}"))
        })
    }

    /// Concatenation of every text block, in order.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .flatten()
            .filter_map(|b| match b {
                ResponseBlock::Text { text } => Some(text.as_str()),
                ResponseBlock::ToolUse(_) => None,
            })
            .collect()
    }

    /// Every capability invocation request, in order.
    pub fn tool_uses(&self) -> Vec<&ToolUse> {
        self.content
            .iter()
            .flatten()
            .filter_map(|b| match b {
                ResponseBlock::ToolUse(call) => Some(call),
                ResponseBlock::Text { .. } => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_tool_use_response() {
        let raw = json!({
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "model": "claude-sonnet-4-20250514",
            "content": [
                {"type": "text", "text": "Let me compute that."},
                {"type": "tool_use", "id": "toolu_01", "name": "calculate_bmi",
                 "input": {"weight_kg": 75, "height_cm": 180}}
            ],
            "stop_reason": "tool_use",
            "stop_sequence": null,
            "usage": {"input_tokens": 10, "output_tokens": 20}
        });
        let resp: MessagesResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(resp.stop_reason().unwrap(), StopReason::ToolUse);
        assert_eq!(resp.text(), "Let me compute that.");
        let calls = resp.tool_uses();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].id, "toolu_01");
        assert_eq!(calls[0].input["height_cm"], 180);
    }

    #[test]
    fn unknown_block_type_fails_to_decode() {
        let raw = json!({
            "id": "msg_02",
            "content": [{"type": "thinking", "thinking": "hmm"}],
            "stop_reason": "end_turn"
        });
        assert!(serde_json::from_value::<MessagesResponse>(raw).is_err());
    }

    #[test]
    fn missing_content_and_unknown_stop_reason_are_malformed() {
        let resp: MessagesResponse =
            serde_json::from_value(json!({"id": "msg_03", "stop_reason": "pause_turn"})).unwrap();
        assert!(matches!(
            resp.blocks(),
            Err(ExchangeError::MalformedResponse(_))
        ));
        assert!(matches!(
            resp.stop_reason(),
            Err(ExchangeError::MalformedResponse(_))
        ));
    }

    #[test]
    fn tool_result_block_serializes_with_correlation_id() {
        let msg = Message::tool_results(vec![ToolResult {
            tool_use_id: "toolu_01".into(),
            content: "{\"bmi\":23.1}".into(),
            is_error: false,
        }]);
        let v = serde_json::to_value(&msg).unwrap();
        assert_eq!(v["role"], "user");
        assert_eq!(v["content"][0]["type"], "tool_result");
        assert_eq!(v["content"][0]["tool_use_id"], "toolu_01");
        assert!(v["content"][0].get("is_error").is_none());
    }

    #[test]
    fn plain_user_turn_serializes_as_string_content() {
        let v = serde_json::to_value(Message::user("hello")).unwrap();
        assert_eq!(v, json!({"role": "user", "content": "hello"}));
    }
}
