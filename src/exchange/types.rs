//! Core types for the exchange module.

use std::sync::Arc;

use serde_json::Value;

use crate::capabilities::CapabilityResult;
use crate::config::ExchangeConfig;
use crate::types::{Message, MessagesResponse, StopReason, ToolUse};

/// Progress notifications emitted while an exchange runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ExchangeEvent {
    /// The user query is about to be sent.
    QuerySent { user_message: String },
    /// A response arrived; `round` is 1 or 2.
    StopReason { round: u8, reason: StopReason },
    /// The model asked for a capability invocation.
    InvocationRequested {
        id: String,
        name: String,
        arguments: Value,
    },
    /// A local capability finished (or was refused).
    InvocationCompleted {
        id: String,
        name: String,
        payload: Value,
        is_error: bool,
    },
    /// Results are about to go back to the model.
    ResultsSent { count: usize },
    /// The exchange finished with this answer.
    FinalAnswer {
        text: String,
        used_capability: bool,
    },
}

pub type ExchangeObserver = Arc<dyn Fn(&ExchangeEvent) + Send + Sync>;

/// Per-exchange request parameters and observer.
#[derive(Clone)]
pub struct ExchangeOptions {
    pub model: String,
    pub max_tokens: u32,
    /// Optional progress callback.
    pub on_event: Option<ExchangeObserver>,
}

impl std::fmt::Debug for ExchangeOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeOptions")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("has_observer", &self.on_event.is_some())
            .finish()
    }
}

impl Default for ExchangeOptions {
    fn default() -> Self {
        Self::from_config(&ExchangeConfig::default())
    }
}

impl ExchangeOptions {
    pub fn from_config(config: &ExchangeConfig) -> Self {
        Self {
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            on_event: None,
        }
    }

    pub fn with_observer<F>(mut self, f: F) -> Self
    where
        F: Fn(&ExchangeEvent) + Send + Sync + 'static,
    {
        self.on_event = Some(Arc::new(f));
        self
    }
}

/// Ordered turns and responses of one exchange. Not retained afterwards.
#[derive(Debug, Clone, Default)]
pub struct ExchangeTranscript {
    /// Turns as sent on the last request.
    pub messages: Vec<Message>,
    /// Every response received, in order.
    pub responses: Vec<MessagesResponse>,
}

impl ExchangeTranscript {
    pub fn new(first: Message) -> Self {
        Self {
            messages: vec![first],
            responses: Vec::new(),
        }
    }

    /// Number of round trips made.
    pub fn remote_calls(&self) -> usize {
        self.responses.len()
    }
}

/// One dispatched invocation and its result.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationRecord {
    pub call: ToolUse,
    pub result: CapabilityResult,
}

/// Result of a completed exchange.
#[derive(Debug, Clone)]
pub struct ExchangeOutcome {
    pub answer: String,
    pub invocations: Vec<InvocationRecord>,
    pub transcript: ExchangeTranscript,
}

impl ExchangeOutcome {
    pub fn used_capability(&self) -> bool {
        !self.invocations.is_empty()
    }
}
