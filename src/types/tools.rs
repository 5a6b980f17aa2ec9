//! Capability declaration types

use serde::{Deserialize, Serialize};

/// Description of one invocable local function, advertised to the remote
/// service on every request.
///
/// Serializes to the Anthropic tool shape:
/// `{ "name": ..., "description": ..., "input_schema": {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilitySpec {
    /// Unique identifier; the remote service echoes it back in `tool_use` blocks.
    pub name: String,
    /// Natural-language purpose guiding when the model should select it.
    pub description: String,
    /// JSON schema of the arguments object
    pub input_schema: serde_json::Value,
}

impl CapabilitySpec {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }

    /// Names listed under `required` in the input schema.
    pub fn required_parameters(&self) -> Vec<&str> {
        self.input_schema
            .get("required")
            .and_then(|v| v.as_array())
            .map(|arr| arr.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default()
    }
}
