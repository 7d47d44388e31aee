//! # MedForm Core
//!
//! Core logic for the medical form service.
//!
//! This crate builds every response payload the service returns:
//! - form extraction results ([`FormExtractionService`])
//! - medication validation results ([`MedicationValidationService`])
//! - FHIR transaction bundles ([`FhirBundleService`])
//! - the service descriptor ([`StatusService`])
//!
//! It also owns start-up configuration ([`CoreConfig`]) and identifier generation.
//!
//! **No API concerns**: HTTP routing, extraction of request bodies and error-to-status mapping
//! belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod error;
pub mod extraction;
pub mod fhir_bundle;
pub mod ids;
pub mod medications;
pub mod status;

pub use config::CoreConfig;
pub use error::{CoreError, CoreResult};
pub use extraction::{FormExtractionService, FormType};
pub use fhir_bundle::FhirBundleService;
pub use ids::{new_resource_id, FormId};
pub use medications::{medication_items, MedicationValidationService};
pub use status::StatusService;
