use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use umami_common::error::UmamiResult;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Device or address-lookup geolocation. Implementations fail with
/// `UmamiError::LocationUnavailable`; callers decide the fallback region.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_location(&self) -> UmamiResult<Coordinates>;

    async fn geocode_address(&self, address: &str) -> UmamiResult<Coordinates>;
}
