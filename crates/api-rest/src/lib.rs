//! # API REST
//!
//! REST API implementation for the medical form service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (body extraction and limits, CORS, request tracing, error bodies)
//!
//! Payloads are built by `medform-core`; wire types come from `api-shared`.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod extract;
pub mod handlers;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use medform_core::{
    CoreConfig, FhirBundleService, FormExtractionService, MedicationValidationService,
    StatusService,
};
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::ApiError;
pub use extract::JsonBody;

/// Application state for the REST API server
///
/// Holds the start-up configuration and the (stateless) services the handlers delegate to.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<CoreConfig>,
    pub extraction: FormExtractionService,
    pub medications: MedicationValidationService,
    pub fhir: FhirBundleService,
    pub status: StatusService,
}

impl AppState {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            cfg,
            extraction: FormExtractionService::new(),
            medications: MedicationValidationService::new(),
            fhir: FhirBundleService::new(),
            status: StatusService::new(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::extract_form,
        handlers::validate_medications,
        handlers::generate_fhir,
        handlers::status,
    ),
    components(schemas(
        api_shared::HealthRes,
        api_shared::ExtractFormReq,
        api_shared::ExtractFormRes,
        api_shared::ExtractedForm,
        api_shared::PatientFields,
        api_shared::ValidateMedicationsReq,
        api_shared::ValidateMedicationsRes,
        api_shared::ValidationResult,
        api_shared::GenerateFhirReq,
        api_shared::GenerateFhirRes,
        api_shared::StatusRes,
        api_shared::ErrorRes,
        fhir::Bundle,
        fhir::BundleEntry,
        fhir::BundleRequest,
        fhir::BundleType,
        fhir::HttpVerb,
        fhir::Resource,
        fhir::PatientResource,
        fhir::HumanName,
        fhir::NameUse,
        fhir::AdministrativeGender,
    ))
)]
pub struct ApiDoc;

/// Build the REST router
///
/// Mounts the five service routes plus Swagger UI (`/swagger-ui`) and the OpenAPI document
/// (`/api-docs/openapi.json`). Request bodies are capped at the configured limit, CORS is open
/// to every origin, a panicking handler answers 500, and each request is traced.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.cfg.body_limit_bytes();

    let routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/api/extract-form", post(handlers::extract_form))
        .route("/api/validate-medications", post(handlers::validate_medications))
        .route("/api/generate-fhir", post(handlers::generate_fhir))
        .route("/api/status", get(handlers::status))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    with_service_layers(routes, body_limit).with_state(state)
}

// Outermost last: tracing sees the final status, CORS headers land on caught panics too.
fn with_service_layers<S>(router: Router<S>, body_limit: usize) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
