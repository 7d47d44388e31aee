//! FHIR-aligned Bundle wire model and JSON translation helpers.
//!
//! Responsibilities:
//! - Define the bundle envelope (`resourceType`, `id`, `type`, `timestamp`, `entry`)
//! - Tag embedded resources by `resourceType`
//! - Parse bundles strictly, surfacing the failing JSON path on schema mismatch
//! - Render bundles back to JSON
//!
//! Notes:
//! - Only the Patient resource is modelled; any other `resourceType` inside an entry is a
//!   schema mismatch.

use crate::patient::PatientResource;
use crate::{FhirError, FhirResult};
use chrono::DateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const BUNDLE_RESOURCE_TYPE: &str = "Bundle";

/// Indicates the purpose of a bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BundleType {
    Transaction,
    Batch,
    Collection,
    Document,
}

/// HTTP verb of a transaction entry request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
}

/// A resource carried in a bundle entry, tagged by `resourceType`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(tag = "resourceType")]
pub enum Resource {
    Patient(PatientResource),
}

/// Transaction request attached to an entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct BundleRequest {
    pub method: HttpVerb,
    pub url: String,
}

/// One entry in a bundle.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct BundleEntry {
    #[serde(rename = "fullUrl", skip_serializing_if = "Option::is_none")]
    pub full_url: Option<String>,

    pub resource: Resource,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<BundleRequest>,
}

impl BundleEntry {
    /// An entry that creates `patient` when the bundle is submitted as a transaction.
    pub fn create_patient(patient: PatientResource) -> Self {
        Self {
            full_url: Some(format!("urn:uuid:{}", patient.id)),
            resource: Resource::Patient(patient),
            request: Some(BundleRequest {
                method: HttpVerb::Post,
                url: "Patient".into(),
            }),
        }
    }
}

/// A FHIR Bundle.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Bundle {
    #[serde(rename = "resourceType")]
    pub resource_type: String,

    pub id: String,

    #[serde(rename = "type")]
    pub bundle_type: BundleType,

    /// When the bundle was assembled (RFC 3339).
    pub timestamp: String,

    #[serde(default)]
    pub entry: Vec<BundleEntry>,
}

impl Bundle {
    /// Create an empty transaction bundle.
    pub fn transaction(id: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            resource_type: BUNDLE_RESOURCE_TYPE.into(),
            id: id.into(),
            bundle_type: BundleType::Transaction,
            timestamp: timestamp.into(),
            entry: Vec::new(),
        }
    }

    /// Append an entry, returning the bundle for chaining.
    pub fn with_entry(mut self, entry: BundleEntry) -> Self {
        self.entry.push(entry);
        self
    }

    /// Iterate the Patient resources embedded in this bundle.
    pub fn patients(&self) -> impl Iterator<Item = &PatientResource> {
        self.entry.iter().map(|e| match &e.resource {
            Resource::Patient(p) => p,
        })
    }

    /// Parse a bundle from JSON text.
    ///
    /// This uses `serde_path_to_error` to surface a best-effort path (e.g.
    /// `entry[0].resource.name`) to the failing field when the JSON does not match the wire
    /// schema.
    ///
    /// # Errors
    ///
    /// Returns [`FhirError`] if:
    /// - the JSON does not represent a valid bundle,
    /// - any unknown keys are present,
    /// - resourceType is not "Bundle",
    /// - the timestamp is not RFC 3339,
    /// - a Patient carries a malformed `birthDate`.
    pub fn parse(json_text: &str) -> FhirResult<Bundle> {
        let mut deserializer = serde_json::Deserializer::from_str(json_text);

        let bundle = match serde_path_to_error::deserialize::<_, Bundle>(&mut deserializer) {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() || path == "." {
                    "<root>"
                } else {
                    path.as_str()
                };
                return Err(FhirError::Translation(format!(
                    "Bundle schema mismatch at {path}: {source}"
                )));
            }
        };
        deserializer.end()?;

        if bundle.resource_type != BUNDLE_RESOURCE_TYPE {
            return Err(FhirError::InvalidInput(format!(
                "Expected resourceType 'Bundle', got '{}'",
                bundle.resource_type
            )));
        }

        DateTime::parse_from_rfc3339(&bundle.timestamp).map_err(|e| {
            FhirError::InvalidInput(format!("invalid timestamp '{}': {e}", bundle.timestamp))
        })?;

        for patient in bundle.patients() {
            patient.parsed_birth_date()?;
        }

        Ok(bundle)
    }

    /// Render the bundle as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FhirError`] if serialisation fails.
    pub fn render(&self) -> FhirResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FhirError::Translation(format!("Failed to serialise bundle: {e}")))
    }
}
