//! Capability set: declarations and handlers kept in lock-step by name.

use std::sync::Arc;

use serde_json::{Value, json};

use super::Capability;
use super::bmi::BmiCalculator;
use crate::error::{CapabilityError, ExchangeError};
use crate::types::{CapabilitySpec, ToolResult, ToolUse};

/// Outcome of dispatching one invocation request.
#[derive(Debug, Clone, PartialEq)]
pub enum CapabilityResult {
    Success(Value),
    Error(CapabilityError),
}

impl CapabilityResult {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// JSON payload sent back to the remote service.
    pub fn payload(&self) -> Value {
        match self {
            Self::Success(v) => v.clone(),
            Self::Error(e) => json!({ "error": e.to_string() }),
        }
    }

    /// Serialize into a result block correlated with `tool_use_id`.
    pub fn into_tool_result(self, tool_use_id: impl Into<String>) -> ToolResult {
        ToolResult {
            tool_use_id: tool_use_id.into(),
            content: self.payload().to_string(),
            is_error: self.is_error(),
        }
    }
}

struct Registered {
    capability: Arc<dyn Capability>,
    validator: jsonschema::Validator,
}

/// Immutable set of capabilities, shared read-only across exchanges.
pub struct CapabilitySet {
    entries: Vec<Registered>,
}

impl std::fmt::Debug for CapabilitySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilitySet")
            .field("names", &self.names())
            .finish()
    }
}

impl CapabilitySet {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The capabilities this crate ships with.
    pub fn standard() -> Result<Self, ExchangeError> {
        Self::empty().register(BmiCalculator::new())
    }

    /// Add a capability. Names must be unique and the input schema must compile.
    pub fn register(mut self, capability: impl Capability + 'static) -> Result<Self, ExchangeError> {
        let spec = capability.spec();
        if self.find(&spec.name).is_some() {
            return Err(ExchangeError::ConfigurationError(format!(
                "capability '{}' registered twice",
                spec.name
            )));
        }
        let validator = jsonschema::validator_for(&spec.input_schema).map_err(|e| {
            ExchangeError::ConfigurationError(format!(
                "invalid input schema for '{}': {e}",
                spec.name
            ))
        })?;
        self.entries.push(Registered {
            capability: Arc::new(capability),
            validator,
        });
        Ok(self)
    }

    pub fn declarations(&self) -> Vec<CapabilitySpec> {
        self.entries
            .iter()
            .map(|e| e.capability.spec().clone())
            .collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|e| e.capability.spec().name.as_str())
            .collect()
    }

    fn find(&self, name: &str) -> Option<&Registered> {
        self.entries
            .iter()
            .find(|e| e.capability.spec().name == name)
    }

    /// Dispatch an invocation request. Never fails: unknown names and invalid
    /// arguments become error results.
    pub fn dispatch(&self, call: &ToolUse) -> CapabilityResult {
        let Some(entry) = self.find(&call.name) else {
            tracing::warn!(capability = %call.name, "unknown capability requested");
            return CapabilityResult::Error(CapabilityError::UnknownCapability(call.name.clone()));
        };

        let violations: Vec<String> = entry
            .validator
            .iter_errors(&call.input)
            .take(3)
            .map(|e| e.to_string())
            .collect();
        if !violations.is_empty() {
            tracing::warn!(
                capability = %call.name,
                reason = %violations.join("; "),
                "arguments rejected by input schema"
            );
            return CapabilityResult::Error(CapabilityError::InvalidArguments(
                violations.join("; "),
            ));
        }

        match entry.capability.invoke(&call.input) {
            Ok(v) => CapabilityResult::Success(v),
            Err(e) => {
                tracing::warn!(capability = %call.name, error = %e, "capability failed");
                CapabilityResult::Error(e)
            }
        }
    }
}
