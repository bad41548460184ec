pub mod distance;
pub mod open_now;
pub mod price;
pub mod rating;
pub mod reviews;

use umami_store::location::Coordinates;
use umami_store::places::Venue;

use crate::config::PricePreference;
use crate::trace::ScorerResult;

/// Everything a scorer may need beyond the venue itself.
#[derive(Debug, Clone, Copy)]
pub struct RankContext {
    pub origin: Coordinates,
    pub radius_m: f64,
    pub preferred_price: PricePreference,
}

pub trait Scorer {
    fn name(&self) -> &'static str;
    fn score(&self, venue: &Venue, ctx: &RankContext) -> ScorerResult;
}
