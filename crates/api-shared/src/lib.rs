//! # API Shared
//!
//! Shared definitions for the medical form service APIs.
//!
//! Contains:
//! - Wire types for every request and response body (`wire` module)
//! - Shared services like `HealthService`
//! - The timestamp format used across all payloads
//!
//! Used by `medform-core` to build payloads and by `api-rest` to serve them.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;

use chrono::{DateTime, SecondsFormat, Utc};

/// Format an instant the way every payload timestamp is rendered
/// (RFC 3339, millisecond precision, `Z` suffix).
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The current instant in payload timestamp format.
pub fn timestamp_now() -> String {
    format_timestamp(Utc::now())
}
