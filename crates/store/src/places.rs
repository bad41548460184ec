use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use umami_common::error::UmamiResult;

use crate::location::Coordinates;

/// Venue record as returned by the places proxy. Every attribute beyond the
/// id and name is optional; the ranking layer fills documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub formatted_address: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    /// Provider price tier label, e.g. "PRICE_LEVEL_MODERATE".
    pub price_level: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub maps_uri: Option<String>,
    pub open_now: Option<bool>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacesQuery {
    /// Genre id or free-text keyword forwarded to the search API.
    pub keyword: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_m: f64,
}

/// Nearby-venue search collaborator. Returns an unordered candidate list;
/// ranking happens locally.
#[async_trait]
pub trait PlacesProvider: Send + Sync {
    async fn search_nearby(&self, query: &PlacesQuery) -> UmamiResult<Vec<Venue>>;
}
