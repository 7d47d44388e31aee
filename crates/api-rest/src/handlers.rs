//! Route handlers.
//!
//! Each handler is stateless apart from the shared configuration: it reads what it needs from
//! the request body, asks the matching core service for the payload, and returns it as JSON.

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::AppState;
use api_shared::{
    ExtractFormReq, ExtractFormRes, GenerateFhirReq, GenerateFhirRes, HealthRes, HealthService,
    StatusRes, ValidateMedicationsReq, ValidateMedicationsRes,
};
use axum::{extract::State, response::Json};

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns the current health status of the service, stamped with the current time.
/// This endpoint is used for monitoring and load balancer health checks.
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health(state.cfg.version()))
}

#[utoipa::path(
    post,
    path = "/api/extract-form",
    request_body = ExtractFormReq,
    responses(
        (status = 200, description = "Extracted form fields", body = ExtractFormRes),
        (status = 400, description = "Malformed JSON body", body = api_shared::ErrorRes),
        (status = 413, description = "Body exceeds the configured limit", body = api_shared::ErrorRes)
    )
)]
/// Extract patient fields from a submitted form image
///
/// The image is accepted but not read. `formType` defaults to `medical`.
#[axum::debug_handler]
pub async fn extract_form(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ExtractFormReq>,
) -> Json<ExtractFormRes> {
    let res = state
        .extraction
        .respond(req.form_type.as_ref(), req.image.as_ref());
    tracing::info!(form_id = %res.data.form_id, form_type = %res.data.form_type, "form extracted");
    Json(res)
}

#[utoipa::path(
    post,
    path = "/api/validate-medications",
    request_body = ValidateMedicationsReq,
    responses(
        (status = 200, description = "One validation result per medication", body = ValidateMedicationsRes),
        (status = 400, description = "Malformed JSON body", body = api_shared::ErrorRes),
        (status = 500, description = "`medications` is missing or not an array", body = api_shared::ErrorRes)
    )
)]
/// Validate a list of medications
///
/// # Errors
/// Returns `500 Internal Server Error` if `medications` is missing or is not an array.
#[axum::debug_handler]
pub async fn validate_medications(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ValidateMedicationsReq>,
) -> Result<Json<ValidateMedicationsRes>, ApiError> {
    match state.medications.respond(req.medications.as_ref()) {
        Ok(res) => {
            tracing::info!(count = res.validation_results.len(), "medications validated");
            Ok(Json(res))
        }
        Err(e) => {
            tracing::error!("Validate medications error: {:?}", e);
            Err(e.into())
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/generate-fhir",
    request_body = GenerateFhirReq,
    responses(
        (status = 200, description = "FHIR transaction bundle", body = GenerateFhirRes),
        (status = 400, description = "Malformed JSON body", body = api_shared::ErrorRes)
    )
)]
/// Generate a FHIR transaction bundle for a patient
#[axum::debug_handler]
pub async fn generate_fhir(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<GenerateFhirReq>,
) -> Json<GenerateFhirRes> {
    let res = state.fhir.respond(req.patient_data.as_ref());
    tracing::info!(bundle_id = %res.fhir_bundle.id, "FHIR bundle generated");
    Json(res)
}

#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Service descriptor", body = StatusRes)
    )
)]
/// Describe the service and the endpoints it serves
#[axum::debug_handler]
pub async fn status(State(state): State<AppState>) -> Json<StatusRes> {
    Json(state.status.describe(&state.cfg))
}
