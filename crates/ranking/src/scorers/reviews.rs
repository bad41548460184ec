use umami_store::places::Venue;

use crate::trace::ScorerResult;

use super::{RankContext, Scorer};

pub struct ReviewVolumeScorer {
    pub weight: f64,
}

impl Scorer for ReviewVolumeScorer {
    fn name(&self) -> &'static str {
        "review_count"
    }

    fn score(&self, venue: &Venue, _ctx: &RankContext) -> ScorerResult {
        let count = venue.review_count.unwrap_or(0);
        // Log compression: roughly saturates around 1000 reviews.
        let score = (f64::from(count) + 1.0).ln() / 1001_f64.ln();

        ScorerResult {
            rule: self.name().to_string(),
            score,
            weight: self.weight,
            weighted_score: score * self.weight,
            detail: format!("review_count={count}"),
        }
    }
}
