//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into the router and services. Environment variables are read by the binary, never
//! during request handling; this module only validates the raw values it is handed.

use crate::constants::{API_VERSION, DEFAULT_BODY_LIMIT_BYTES, DEFAULT_HOST, DEFAULT_PORT};
use crate::{CoreError, CoreResult};
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    host: IpAddr,
    port: u16,
    body_limit_bytes: usize,
    version: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            version: API_VERSION.into(),
        }
    }
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(host: IpAddr, port: u16, body_limit_bytes: usize) -> CoreResult<Self> {
        if body_limit_bytes == 0 {
            return Err(CoreError::InvalidConfig {
                key: "MEDFORM_BODY_LIMIT_BYTES",
                reason: "body limit must be greater than zero".into(),
            });
        }

        Ok(Self {
            host,
            port,
            body_limit_bytes,
            version: API_VERSION.into(),
        })
    }

    /// Build a config from optional raw environment values.
    ///
    /// `None`, empty or whitespace-only values fall back to the defaults
    /// (`0.0.0.0`, port 3001, 50 MiB).
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidConfig`] naming the offending variable if a value does not
    /// parse.
    pub fn from_env_values(
        port: Option<String>,
        host: Option<String>,
        body_limit_bytes: Option<String>,
    ) -> CoreResult<Self> {
        let port = parse_env_value("PORT", port)?.unwrap_or(DEFAULT_PORT);
        let host = parse_env_value("MEDFORM_HOST", host)?.unwrap_or(IpAddr::from(DEFAULT_HOST));
        let body_limit_bytes = parse_env_value("MEDFORM_BODY_LIMIT_BYTES", body_limit_bytes)?
            .unwrap_or(DEFAULT_BODY_LIMIT_BYTES);

        Self::new(host, port, body_limit_bytes)
    }

    /// Override the maximum accepted request body size.
    pub fn with_body_limit(mut self, body_limit_bytes: usize) -> Self {
        self.body_limit_bytes = body_limit_bytes;
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_bytes
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

fn parse_env_value<T>(key: &'static str, value: Option<String>) -> CoreResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(|v| {
            v.parse::<T>().map_err(|e| CoreError::InvalidConfig {
                key,
                reason: format!("'{v}': {e}"),
            })
        })
        .transpose()
}
