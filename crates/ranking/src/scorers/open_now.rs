use umami_store::places::Venue;

use crate::trace::ScorerResult;

use super::{RankContext, Scorer};

pub struct OpenNowScorer {
    pub weight: f64,
}

impl Scorer for OpenNowScorer {
    fn name(&self) -> &'static str {
        "open_now"
    }

    fn score(&self, venue: &Venue, _ctx: &RankContext) -> ScorerResult {
        // A confirmed-closed venue stays rankable, just penalized.
        let score = match venue.open_now {
            Some(true) => 1.0,
            Some(false) => 0.3,
            None => 0.5,
        };

        ScorerResult {
            rule: self.name().to_string(),
            score,
            weight: self.weight,
            weighted_score: score * self.weight,
            detail: format!("open_now={:?}", venue.open_now),
        }
    }
}
