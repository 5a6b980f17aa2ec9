//! Two-phase exchange: ask, dispatch requested capabilities, ask again.

use std::sync::Arc;

use tracing::Instrument;

use super::types::{
    ExchangeEvent, ExchangeOptions, ExchangeOutcome, ExchangeTranscript, InvocationRecord,
};
use crate::capabilities::CapabilitySet;
use crate::client::MessagesApi;
use crate::error::ExchangeError;
use crate::types::{CapabilitySpec, Message, MessagesRequest, MessagesResponse, ToolUse};

/// Drives single-round tool-use exchanges against a [`MessagesApi`].
///
/// Holds no per-exchange state; one instance can serve any number of
/// independent exchanges, concurrently if the caller wishes.
pub struct ToolExchange<C: ?Sized> {
    client: Arc<C>,
    capabilities: Arc<CapabilitySet>,
    options: ExchangeOptions,
}

impl<C: MessagesApi + ?Sized> ToolExchange<C> {
    pub fn new(client: Arc<C>, capabilities: Arc<CapabilitySet>, options: ExchangeOptions) -> Self {
        Self {
            client,
            capabilities,
            options,
        }
    }

    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    pub fn options(&self) -> &ExchangeOptions {
        &self.options
    }

    /// Answer `user_message`, invoking local capabilities if the model asks.
    pub async fn process_query(&self, user_message: &str) -> Result<String, ExchangeError> {
        self.run(user_message).await.map(|outcome| outcome.answer)
    }

    /// Like [`process_query`](Self::process_query) but returns the transcript
    /// and dispatched invocations as well.
    pub async fn run(&self, user_message: &str) -> Result<ExchangeOutcome, ExchangeError> {
        let exchange_id = uuid::Uuid::new_v4();
        let span = tracing::info_span!("tool_exchange", %exchange_id, model = %self.options.model);
        self.run_inner(user_message).instrument(span).await
    }

    async fn run_inner(&self, user_message: &str) -> Result<ExchangeOutcome, ExchangeError> {
        let declarations = self.capabilities.declarations();
        let mut transcript = ExchangeTranscript::new(Message::user(user_message));

        self.emit(ExchangeEvent::QuerySent {
            user_message: user_message.to_string(),
        });
        tracing::info!("sending query");

        let first = self.send(&declarations, &transcript.messages).await?;
        let blocks = first.blocks()?.to_vec();
        let reason = first.stop_reason()?;
        self.emit(ExchangeEvent::StopReason { round: 1, reason });
        tracing::info!(stop_reason = %reason, "first response");

        if !reason.requests_invocation() {
            let answer = first.text();
            transcript.responses.push(first);
            return Ok(self.finish(answer, Vec::new(), transcript));
        }

        let calls: Vec<ToolUse> = first.tool_uses().into_iter().cloned().collect();
        if calls.is_empty() {
            return Err(ExchangeError::MalformedResponse(format!(
                "response {} stopped for tool_use but carries no tool_use block",
                first.id
            )));
        }
        transcript.messages.push(Message::assistant(&blocks));
        transcript.responses.push(first);

        let invocations: Vec<InvocationRecord> =
            calls.into_iter().map(|call| self.dispatch(call)).collect();
        let results = invocations
            .iter()
            .map(|inv| inv.result.clone().into_tool_result(inv.call.id.clone()))
            .collect();
        transcript.messages.push(Message::tool_results(results));

        self.emit(ExchangeEvent::ResultsSent {
            count: invocations.len(),
        });
        tracing::info!(results = invocations.len(), "sending capability results");

        let second = self.send(&declarations, &transcript.messages).await?;
        second.blocks()?;
        let reason = second.stop_reason()?;
        self.emit(ExchangeEvent::StopReason { round: 2, reason });
        if reason.requests_invocation() {
            tracing::warn!(
                "model requested another invocation; returning the text of the second response"
            );
        }

        let answer = second.text();
        transcript.responses.push(second);
        Ok(self.finish(answer, invocations, transcript))
    }

    fn dispatch(&self, call: ToolUse) -> InvocationRecord {
        self.emit(ExchangeEvent::InvocationRequested {
            id: call.id.clone(),
            name: call.name.clone(),
            arguments: call.input.clone(),
        });
        tracing::info!(capability = %call.name, id = %call.id, "dispatching invocation");

        let result = self.capabilities.dispatch(&call);

        self.emit(ExchangeEvent::InvocationCompleted {
            id: call.id.clone(),
            name: call.name.clone(),
            payload: result.payload(),
            is_error: result.is_error(),
        });
        InvocationRecord { call, result }
    }

    async fn send(
        &self,
        tools: &[CapabilitySpec],
        messages: &[Message],
    ) -> Result<MessagesResponse, ExchangeError> {
        let request = MessagesRequest {
            model: self.options.model.clone(),
            max_tokens: self.options.max_tokens,
            tools: tools.to_vec(),
            messages: messages.to_vec(),
        };
        self.client.create_message(&request).await
    }

    fn finish(
        &self,
        answer: String,
        invocations: Vec<InvocationRecord>,
        transcript: ExchangeTranscript,
    ) -> ExchangeOutcome {
        self.emit(ExchangeEvent::FinalAnswer {
            text: answer.clone(),
            used_capability: !invocations.is_empty(),
        });
        tracing::info!(
            remote_calls = transcript.remote_calls(),
            invocations = invocations.len(),
            "exchange finished"
        );
        ExchangeOutcome {
            answer,
            invocations,
            transcript,
        }
    }

    fn emit(&self, event: ExchangeEvent) {
        if let Some(cb) = &self.options.on_event {
            cb(&event);
        }
    }
}
