//! FHIR bundle generation.
//!
//! The generated bundle always carries a single Patient named John Doe. Request data is used
//! only loosely: a recognised `gender` code and a well-formed `birthDate` are copied across,
//! everything else in `patientData` is ignored.

use crate::constants::{
    FHIR_DEFAULT_BIRTH_DATE, FHIR_MESSAGE, FHIR_PATIENT_FAMILY, FHIR_PATIENT_GIVEN,
};
use crate::ids::new_resource_id;
use api_shared::GenerateFhirRes;
use fhir::{AdministrativeGender, Bundle, BundleEntry, HumanName, PatientResource};
use serde_json::Value;

/// Builds FHIR bundle payloads.
#[derive(Clone, Default)]
pub struct FhirBundleService;

impl FhirBundleService {
    pub fn new() -> Self {
        Self
    }

    /// Generate a transaction bundle creating one Patient.
    ///
    /// The bundle and the patient each get a fresh identifier.
    pub fn generate(&self, patient_data: Option<&Value>) -> Bundle {
        let patient = PatientResource {
            id: new_resource_id(),
            name: vec![HumanName::official(FHIR_PATIENT_FAMILY, FHIR_PATIENT_GIVEN)],
            gender: Some(gender_from(patient_data)),
            birth_date: Some(birth_date_from(patient_data)),
        };

        tracing::debug!(patient_id = %patient.id, "generating FHIR bundle");

        Bundle::transaction(new_resource_id(), api_shared::timestamp_now())
            .with_entry(BundleEntry::create_patient(patient))
    }

    /// Wrap a generated bundle in the success envelope.
    pub fn respond(&self, patient_data: Option<&Value>) -> GenerateFhirRes {
        GenerateFhirRes {
            success: true,
            fhir_bundle: self.generate(patient_data),
            compliant: true,
            message: FHIR_MESSAGE.into(),
        }
    }
}

fn field<'a>(patient_data: Option<&'a Value>, key: &str) -> Option<&'a str> {
    patient_data.and_then(|d| d.get(key)).and_then(Value::as_str)
}

fn gender_from(patient_data: Option<&Value>) -> AdministrativeGender {
    field(patient_data, "gender")
        .and_then(|g| g.parse().ok())
        .unwrap_or_default()
}

fn birth_date_from(patient_data: Option<&Value>) -> String {
    field(patient_data, "birthDate")
        .map(str::trim)
        .filter(|d| fhir::parse_birth_date(d).is_ok())
        .unwrap_or(FHIR_DEFAULT_BIRTH_DATE)
        .to_owned()
}
