//! Constants used throughout the core crate.
//!
//! Every fixed value that appears in a response payload lives here so the literal shapes
//! stay consistent between the REST API and the CLI.

/// Version reported by `/health` and `/api/status`.
pub const API_VERSION: &str = "1.0.0";

/// Human readable service name reported by `/api/status`.
pub const SERVICE_NAME: &str = "Medical Form Processing API";

/// Operational status reported by `/api/status`.
pub const SERVICE_STATUS: &str = "operational";

/// Default listening port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3001;

/// Default bind address when `MEDFORM_HOST` is unset.
pub const DEFAULT_HOST: [u8; 4] = [0, 0, 0, 0];

/// Default maximum request body size (50 MiB).
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 50 * 1024 * 1024;

/// Form type used when a request does not name one.
pub const DEFAULT_FORM_TYPE: &str = "medical";

/// Confidence reported for every extraction.
pub const EXTRACTION_CONFIDENCE: f64 = 0.94;

/// Engine label reported for every extraction.
pub const OCR_ENGINE: &str = "MedForm OCR (simulated)";

/// Processing time reported for every extraction.
pub const PROCESSING_TIME: &str = "1.2s";

pub const EXTRACTION_MESSAGE: &str = "Form data extracted successfully";

/// Risk score attached to each validated medication.
pub const MEDICATION_RISK_SCORE: f64 = 0.05;

/// Risk score reported for a whole validation request.
pub const OVERALL_RISK_SCORE: f64 = 0.03;

pub const FHIR_MESSAGE: &str = "FHIR bundle generated successfully";

/// Family name of the generated Patient resource.
pub const FHIR_PATIENT_FAMILY: &str = "Doe";

/// Given names of the generated Patient resource.
pub const FHIR_PATIENT_GIVEN: &[&str] = &["John"];

/// Birth date used when the request carries no usable one.
pub const FHIR_DEFAULT_BIRTH_DATE: &str = "1985-03-15";

/// Paths served by the REST API, in the order `/api/status` lists them.
pub const ENDPOINTS: [&str; 5] = [
    "/health",
    "/api/extract-form",
    "/api/validate-medications",
    "/api/generate-fhir",
    "/api/status",
];
