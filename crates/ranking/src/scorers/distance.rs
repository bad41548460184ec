use umami_store::places::Venue;

use crate::geo::haversine_distance_m;
use crate::trace::ScorerResult;

use super::{RankContext, Scorer};

pub struct DistanceScorer {
    pub weight: f64,
}

impl Scorer for DistanceScorer {
    fn name(&self) -> &'static str {
        "distance"
    }

    fn score(&self, venue: &Venue, ctx: &RankContext) -> ScorerResult {
        // Missing coordinates take no penalty; recall over precision.
        let (score, detail) = match venue.coordinates {
            Some(coords) => {
                let distance = haversine_distance_m(ctx.origin, coords);
                let score = (1.0 - distance / ctx.radius_m).max(0.0);
                (score, format!("distance_m={distance:.0}"))
            }
            None => (1.0, "distance_m=unknown".to_string()),
        };

        ScorerResult {
            rule: self.name().to_string(),
            score,
            weight: self.weight,
            weighted_score: score * self.weight,
            detail,
        }
    }
}
