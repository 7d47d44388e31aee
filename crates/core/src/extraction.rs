//! Form extraction.
//!
//! No OCR is performed: the submitted image is never decoded, and every extraction returns
//! the same patient fields. Only the identifier and timestamp change between calls.

use crate::constants::{
    DEFAULT_FORM_TYPE, EXTRACTION_CONFIDENCE, EXTRACTION_MESSAGE, OCR_ENGINE, PROCESSING_TIME,
};
use crate::ids::FormId;
use api_shared::{ExtractFormRes, ExtractedForm, PatientFields};
use serde_json::Value;
use std::fmt;

/// Kind of form named by a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormType(String);

impl FormType {
    /// Resolve the form type from the raw request value.
    ///
    /// A non-blank string is kept (trimmed); anything else becomes `medical`.
    pub fn from_request(value: Option<&str>) -> Self {
        let trimmed = value.map(str::trim).filter(|v| !v.is_empty());
        Self(trimmed.unwrap_or(DEFAULT_FORM_TYPE).to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FormType {
    fn default() -> Self {
        Self(DEFAULT_FORM_TYPE.into())
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds extraction payloads.
#[derive(Clone, Default)]
pub struct FormExtractionService;

impl FormExtractionService {
    pub fn new() -> Self {
        Self
    }

    /// Extract patient fields from a submitted form image.
    ///
    /// # Arguments
    /// * `form_type` - Raw `formType` from the request, if any
    /// * `image` - Raw `image` from the request; only its size is logged
    ///
    /// # Returns
    /// The fixed [`ExtractedForm`] with a new [`FormId`] and the current timestamp.
    pub fn extract(&self, form_type: Option<&Value>, image: Option<&Value>) -> ExtractedForm {
        let form_type = FormType::from_request(form_type.and_then(Value::as_str));
        let form_id = FormId::new();
        let image_chars = image.and_then(Value::as_str).map_or(0, str::len);

        tracing::debug!(%form_id, %form_type, image_chars, "extracting form");

        ExtractedForm {
            form_id: form_id.to_string(),
            form_type: form_type.as_str().to_owned(),
            extracted_at: api_shared::timestamp_now(),
            fields: sample_patient_fields(),
            confidence: EXTRACTION_CONFIDENCE,
            ocr_engine: OCR_ENGINE.into(),
            processing_time: PROCESSING_TIME.into(),
        }
    }

    /// Wrap an extraction in the success envelope.
    pub fn respond(&self, form_type: Option<&Value>, image: Option<&Value>) -> ExtractFormRes {
        ExtractFormRes {
            success: true,
            data: self.extract(form_type, image),
            message: EXTRACTION_MESSAGE.into(),
        }
    }
}

fn sample_patient_fields() -> PatientFields {
    PatientFields {
        patient_name: "John Doe".into(),
        date_of_birth: "1985-03-15".into(),
        patient_id: "P-12345".into(),
        gender: "male".into(),
        address: "123 Main Street, Springfield, IL 62701".into(),
        phone: "(555) 123-4567".into(),
        insurance_provider: "BlueCross BlueShield".into(),
        insurance_number: "BCB-987654321".into(),
        primary_physician: "Dr. Sarah Smith".into(),
        medications: vec!["Lisinopril 10mg".into(), "Metformin 500mg".into()],
        allergies: vec!["Penicillin".into()],
    }
}
