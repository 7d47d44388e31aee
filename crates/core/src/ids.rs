//! Identifier generation.
//!
//! Extracted forms are identified by a [`FormId`] token: the prefix `form_` followed by a
//! v4 UUID in canonical form (32 lowercase hexadecimal characters, no hyphens).
//!
//! - Length: 37
//! - Example: `form_550e8400e29b41d4a716446655440000`
//!
//! FHIR resources use plain hyphenated v4 UUIDs, see [`new_resource_id`].

use crate::{CoreError, CoreResult};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const FORM_ID_PREFIX: &str = "form_";

/// Unique token identifying one extraction.
///
/// Once constructed, the contained UUID is guaranteed to render in canonical form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FormId(Uuid);

impl Default for FormId {
    fn default() -> Self {
        Self::new()
    }
}

impl FormId {
    /// Generates a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validates an externally supplied token.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidInput`] unless `input` is `form_` followed by exactly 32
    /// lowercase hexadecimal characters.
    pub fn parse(input: &str) -> CoreResult<Self> {
        let hex = input.strip_prefix(FORM_ID_PREFIX).ok_or_else(|| {
            CoreError::InvalidInput(format!("form id must start with '{FORM_ID_PREFIX}'"))
        })?;

        if !is_canonical_hex(hex) {
            return Err(CoreError::InvalidInput(format!(
                "form id must be '{FORM_ID_PREFIX}' followed by 32 lowercase hex characters, got '{input}'"
            )));
        }

        let uuid = Uuid::parse_str(hex)
            .map_err(|e| CoreError::InvalidInput(format!("invalid form id '{input}': {e}")))?;
        Ok(Self(uuid))
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{FORM_ID_PREFIX}{}", self.0.simple())
    }
}

impl FromStr for FormId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A fresh hyphenated v4 UUID for a FHIR resource or bundle id.
pub fn new_resource_id() -> String {
    Uuid::new_v4().to_string()
}

fn is_canonical_hex(s: &str) -> bool {
    s.len() == 32 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
