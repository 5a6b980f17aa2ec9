//! Static capability declarations advertised to the remote service.

use serde_json::json;

use super::bmi::CALCULATE_BMI;
use crate::types::CapabilitySpec;

pub fn bmi_capability_spec() -> CapabilitySpec {
    CapabilitySpec::new(
        CALCULATE_BMI,
        "Calculates BMI (Body Mass Index) from weight and height. \
         Use this tool when the user wants to know their BMI.",
        json!({
            "type": "object",
            "properties": {
                "weight_kg": {
                    "type": "number",
                    "description": "Weight in kilograms"
                },
                "height_cm": {
                    "type": "number",
                    "description": "Height in centimeters"
                }
            },
            "required": ["weight_kg", "height_cm"]
        }),
    )
}
