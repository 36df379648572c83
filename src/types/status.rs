//! Service status banner.

use serde::{Deserialize, Serialize};

/// Response of the service's root endpoint, used as a connectivity probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub message: String,
}
