//! Medication validation.
//!
//! There is no interaction database behind this: every medication is reported valid, with no
//! interactions or warnings and a fixed risk score. The one real check is that the request
//! actually carries an array.

use crate::constants::{MEDICATION_RISK_SCORE, OVERALL_RISK_SCORE};
use crate::{CoreError, CoreResult};
use api_shared::{ValidateMedicationsRes, ValidationResult};
use serde_json::Value;

const MEDICATIONS_FIELD: &str = "medications";

/// Read the items of the raw `medications` request value.
///
/// Items are returned as sent: non-string entries are echoed back untouched, not coerced.
///
/// # Errors
/// Returns [`CoreError::NotASequence`] if the value is missing or is not a JSON array.
pub fn medication_items(value: Option<&Value>) -> CoreResult<&[Value]> {
    match value {
        Some(Value::Array(items)) => Ok(items),
        other => Err(CoreError::NotASequence {
            field: MEDICATIONS_FIELD,
            found: json_kind(other),
        }),
    }
}

fn json_kind(value: Option<&Value>) -> &'static str {
    match value {
        None => "undefined",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

/// Builds validation payloads.
#[derive(Clone, Default)]
pub struct MedicationValidationService;

impl MedicationValidationService {
    pub fn new() -> Self {
        Self
    }

    /// One result per medication, in input order.
    pub fn validate(&self, medications: &[Value]) -> Vec<ValidationResult> {
        medications
            .iter()
            .map(|medication| ValidationResult {
                medication: medication.clone(),
                valid: true,
                interactions: Vec::new(),
                risk_score: MEDICATION_RISK_SCORE,
                warnings: Vec::new(),
            })
            .collect()
    }

    /// Validate the raw `medications` request value and wrap the results.
    ///
    /// # Errors
    /// Returns [`CoreError::NotASequence`] if `medications` is not an array.
    pub fn respond(&self, medications: Option<&Value>) -> CoreResult<ValidateMedicationsRes> {
        let items = medication_items(medications)?;
        tracing::debug!(count = items.len(), "validating medications");

        Ok(ValidateMedicationsRes {
            success: true,
            validation_results: self.validate(items),
            overall_risk_score: OVERALL_RISK_SCORE,
            safe_for_processing: true,
        })
    }
}
