use umami_store::places::Venue;

use crate::trace::ScorerResult;

use super::{RankContext, Scorer};

/// Unrated venues read as an average 3.0 rather than dropping to zero.
const DEFAULT_RATING: f64 = 3.0;

pub struct RatingScorer {
    pub weight: f64,
}

impl Scorer for RatingScorer {
    fn name(&self) -> &'static str {
        "rating"
    }

    fn score(&self, venue: &Venue, _ctx: &RankContext) -> ScorerResult {
        let rating = venue.rating.unwrap_or(DEFAULT_RATING);
        let score = rating / 5.0;

        ScorerResult {
            rule: self.name().to_string(),
            score,
            weight: self.weight,
            weighted_score: score * self.weight,
            detail: format!("rating={:?}", venue.rating),
        }
    }
}
