//! FHIR wire support for the medical form service.
//!
//! This crate provides **wire models** and **JSON translation helpers** for the FHIR-shaped
//! payloads the service hands back to callers:
//! - transaction bundles ([`Bundle`]) carrying generated resources
//! - the Patient resource ([`PatientResource`]) embedded in those bundles
//!
//! This crate focuses on:
//! - FHIR semantic alignment of the JSON envelope (resourceType, entries, requests)
//! - strict serialisation/deserialisation with path-aware error messages
//!
//! It does NOT validate resources against FHIR profiles or StructureDefinitions.

pub mod bundle;
pub mod patient;

pub use bundle::{Bundle, BundleEntry, BundleRequest, BundleType, HttpVerb, Resource};
pub use patient::{parse_birth_date, AdministrativeGender, HumanName, NameUse, PatientResource};

/// Errors returned by the `fhir` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum FhirError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`FhirError`].
pub type FhirResult<T> = Result<T, FhirError>;
