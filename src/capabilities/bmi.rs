//! Body mass index calculator.
//!
//! The index is rounded to one decimal place with round-half-to-even, and the
//! category is derived from the rounded value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Capability;
use super::declaration::bmi_capability_spec;
use crate::error::CapabilityError;
use crate::types::CapabilitySpec;

/// Name under which the calculator is declared.
pub const CALCULATE_BMI: &str = "calculate_bmi";

/// Weight category for a BMI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    #[serde(rename = "underweight")]
    Underweight,
    #[serde(rename = "normal weight")]
    NormalWeight,
    #[serde(rename = "overweight")]
    Overweight,
    #[serde(rename = "obesity")]
    Obesity,
}

impl BmiCategory {
    /// Thresholds are checked in order; the first match wins.
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::NormalWeight
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obesity
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::NormalWeight => "normal weight",
            Self::Overweight => "overweight",
            Self::Obesity => "obesity",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Calculator output; inputs are echoed back for traceability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiReport {
    pub bmi: f64,
    pub category: BmiCategory,
    pub weight_kg: f64,
    pub height_cm: f64,
}

/// Compute the body mass index for a weight in kilograms and a height in centimetres.
///
/// Requires finite inputs, `height_cm > 0` and `weight_kg >= 0`.
pub fn compute_body_mass_index(
    weight_kg: f64,
    height_cm: f64,
) -> Result<BmiReport, CapabilityError> {
    if !weight_kg.is_finite() || !height_cm.is_finite() {
        return Err(CapabilityError::InvalidArguments(format!(
            "weight_kg and height_cm must be finite numbers (got {weight_kg}, {height_cm})"
        )));
    }
    if height_cm <= 0.0 {
        return Err(CapabilityError::InvalidArguments(format!(
            "height_cm must be positive (got {height_cm})"
        )));
    }
    if weight_kg < 0.0 {
        return Err(CapabilityError::InvalidArguments(format!(
            "weight_kg must not be negative (got {weight_kg})"
        )));
    }

    let height_m = height_cm / 100.0;
    let bmi = round_to_tenth(weight_kg / (height_m * height_m));
    if !bmi.is_finite() {
        return Err(CapabilityError::InvalidArguments(format!(
            "BMI for weight_kg={weight_kg}, height_cm={height_cm} is out of range"
        )));
    }

    Ok(BmiReport {
        bmi,
        category: BmiCategory::classify(bmi),
        weight_kg,
        height_cm,
    })
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

#[derive(Debug, Deserialize)]
struct BmiArguments {
    weight_kg: f64,
    height_cm: f64,
}

/// [`Capability`] adapter around [`compute_body_mass_index`].
#[derive(Debug, Clone)]
pub struct BmiCalculator {
    spec: CapabilitySpec,
}

impl BmiCalculator {
    pub fn new() -> Self {
        Self {
            spec: bmi_capability_spec(),
        }
    }
}

impl Default for BmiCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Capability for BmiCalculator {
    fn spec(&self) -> &CapabilitySpec {
        &self.spec
    }

    fn invoke(&self, arguments: &Value) -> Result<Value, CapabilityError> {
        let args: BmiArguments = serde_json::from_value(arguments.clone())
            .map_err(|e| CapabilityError::InvalidArguments(e.to_string()))?;
        let report = compute_body_mass_index(args.weight_kg, args.height_cm)?;
        serde_json::to_value(report).map_err(|e| CapabilityError::InvalidArguments(e.to_string()))
    }
}
