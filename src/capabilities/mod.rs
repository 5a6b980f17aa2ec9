//! Locally implemented capabilities the remote service may invoke.
//!
//! A capability is declared and implemented by the same type, so the list of
//! declarations sent to the model and the set of handlers cannot drift apart.

pub mod bmi;
pub mod declaration;
pub mod registry;

use serde_json::Value;

use crate::error::CapabilityError;
use crate::types::CapabilitySpec;

pub use bmi::{BmiCalculator, BmiCategory, BmiReport, CALCULATE_BMI, compute_body_mass_index};
pub use declaration::bmi_capability_spec;
pub use registry::{CapabilityResult, CapabilitySet};

/// A named local function together with its declaration.
pub trait Capability: Send + Sync {
    /// Declaration advertised to the remote service.
    fn spec(&self) -> &CapabilitySpec;

    /// Run the capability with the arguments the model supplied.
    fn invoke(&self, arguments: &Value) -> Result<Value, CapabilityError>;
}
