use crate::wire::HealthRes;

/// Status string reported while the process is serving requests.
pub const HEALTHY: &str = "healthy";

/// Simple health service usable by both the REST API and the CLI
///
/// This service provides a standardised way to check the health status of the service.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Creates a new instance of HealthService.
    pub fn new() -> Self {
        Self
    }

    /// Static method to check health without creating an instance
    ///
    /// # Arguments
    /// * `version` - API version to report
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy, stamped with the current time.
    pub fn check_health(version: &str) -> HealthRes {
        HealthRes {
            status: HEALTHY.into(),
            timestamp: crate::timestamp_now(),
            version: version.into(),
        }
    }
}
