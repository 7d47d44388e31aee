//! Request and response bodies.
//!
//! Field names are camelCase on the wire. Request bodies are deliberately loose: fields the
//! service ignores, or inspects only when present, are carried as raw JSON so that any body the
//! client sends is accepted by the transport layer.

use fhir::Bundle;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractFormReq {
    /// Encoded form image. Accepted but never inspected.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub image: Option<Value>,

    /// Kind of form being submitted; defaults to `medical`.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub form_type: Option<Value>,
}

/// Patient fields read off a form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientFields {
    pub patient_name: String,
    pub date_of_birth: String,
    pub patient_id: String,
    pub gender: String,
    pub address: String,
    pub phone: String,
    pub insurance_provider: String,
    pub insurance_number: String,
    pub primary_physician: String,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedForm {
    pub form_id: String,
    pub form_type: String,
    pub extracted_at: String,
    pub fields: PatientFields,
    pub confidence: f64,
    pub ocr_engine: String,
    pub processing_time: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExtractFormRes {
    pub success: bool,
    pub data: ExtractedForm,
    pub message: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ValidateMedicationsReq {
    /// Medication names; anything other than an array fails the request.
    #[serde(default)]
    #[schema(value_type = Vec<String>)]
    pub medications: Option<Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// The request item, echoed unchanged (normally a medication name).
    #[schema(value_type = String)]
    pub medication: Value,
    pub valid: bool,
    pub interactions: Vec<String>,
    pub risk_score: f64,
    pub warnings: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateMedicationsRes {
    pub success: bool,
    pub validation_results: Vec<ValidationResult>,
    pub overall_risk_score: f64,
    pub safe_for_processing: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateFhirReq {
    /// Free-form patient data; only `gender` and `birthDate` are looked at.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub patient_data: Option<Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateFhirRes {
    pub success: bool,
    pub fhir_bundle: Bundle,
    pub compliant: bool,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusRes {
    pub service: String,
    pub status: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

/// Body of every non-2xx response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub success: bool,
    pub error: String,
}

impl ErrorRes {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_tolerate_missing_fields() {
        let req: ExtractFormReq = serde_json::from_str("{}").expect("empty object");
        assert!(req.image.is_none());
        assert!(req.form_type.is_none());

        let req: ValidateMedicationsReq =
            serde_json::from_str(r#"{"other": 1}"#).expect("unrelated keys");
        assert!(req.medications.is_none());
    }

    #[test]
    fn extract_request_reads_camel_case() {
        let req: ExtractFormReq =
            serde_json::from_str(r#"{"image":"aGVsbG8=","formType":"intake"}"#).expect("parse");
        assert_eq!(req.form_type.as_ref().and_then(Value::as_str), Some("intake"));
    }

    #[test]
    fn error_body_is_unsuccessful() {
        let json = serde_json::to_value(ErrorRes::new("boom")).expect("serialise");
        assert_eq!(json, serde_json::json!({ "success": false, "error": "boom" }));
    }
}
