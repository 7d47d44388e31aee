//! FHIR-aligned Patient resource.
//!
//! Only the demographic subset the service emits is modelled: identifiers, names,
//! administrative gender and birth date. Unknown keys are rejected on deserialisation so a
//! bundle read back from JSON matches exactly what was produced.

use crate::{FhirError, FhirResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

/// Purpose of a human name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NameUse {
    /// Official name.
    Official,
    /// Usual/preferred name.
    Usual,
    /// Temporary name.
    Temp,
    /// Nickname or informal name.
    Nickname,
    /// Anonymous name.
    Anonymous,
    /// Old name (no longer in use).
    Old,
    /// Maiden name.
    Maiden,
}

/// Administrative gender as defined by the FHIR value set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AdministrativeGender {
    #[default]
    Male,
    Female,
    Other,
    Unknown,
}

impl FromStr for AdministrativeGender {
    type Err = FhirError;

    /// Parses a gender code, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(AdministrativeGender::Male),
            "female" => Ok(AdministrativeGender::Female),
            "other" => Ok(AdministrativeGender::Other),
            "unknown" => Ok(AdministrativeGender::Unknown),
            other => Err(FhirError::InvalidInput(format!(
                "unsupported administrative gender '{other}'"
            ))),
        }
    }
}

/// Human name representation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct HumanName {
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_type: Option<NameUse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub given: Vec<String>,
}

impl HumanName {
    /// An official name with the given family and given names.
    pub fn official(family: impl Into<String>, given: &[&str]) -> Self {
        Self {
            use_type: Some(NameUse::Official),
            family: Some(family.into()),
            given: given.iter().map(|g| (*g).to_string()).collect(),
        }
    }
}

/// A Patient resource as embedded in a bundle entry.
///
/// `resourceType` is not a field here: it is the tag of [`crate::Resource`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct PatientResource {
    pub id: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<HumanName>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<AdministrativeGender>,

    /// Date of birth (ISO 8601 date format: YYYY-MM-DD).
    #[serde(rename = "birthDate", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
}

impl PatientResource {
    /// Family name of the first recorded name, if any.
    pub fn family_name(&self) -> Option<&str> {
        self.name.first().and_then(|n| n.family.as_deref())
    }

    /// The `birthDate` as a calendar date, if present.
    ///
    /// # Errors
    ///
    /// Returns [`FhirError::InvalidInput`] if `birthDate` is present but not `YYYY-MM-DD`.
    pub fn parsed_birth_date(&self) -> FhirResult<Option<NaiveDate>> {
        self.birth_date.as_deref().map(parse_birth_date).transpose()
    }
}

/// Parse a FHIR `date` in its full `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns [`FhirError::InvalidInput`] if `value` is not a valid calendar date in that form.
pub fn parse_birth_date(value: &str) -> FhirResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| FhirError::InvalidInput(format!("invalid birthDate '{value}': {e}")))
}
