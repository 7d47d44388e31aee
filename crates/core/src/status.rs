use crate::constants::{ENDPOINTS, SERVICE_NAME, SERVICE_STATUS};
use crate::CoreConfig;
use api_shared::StatusRes;

/// Describes the running service.
#[derive(Clone, Default)]
pub struct StatusService;

impl StatusService {
    pub fn new() -> Self {
        Self
    }

    /// Static service descriptor listing every served path.
    pub fn describe(&self, cfg: &CoreConfig) -> StatusRes {
        StatusRes {
            service: SERVICE_NAME.into(),
            status: SERVICE_STATUS.into(),
            version: cfg.version().into(),
            endpoints: ENDPOINTS.iter().map(|e| (*e).to_string()).collect(),
        }
    }
}
