use umami_store::places::Venue;

use crate::trace::ScorerResult;

use super::{RankContext, Scorer};

/// Provider price tier label → ordinal 0-4.
fn venue_price_ordinal(label: &str) -> Option<u8> {
    match label {
        "PRICE_LEVEL_FREE" => Some(0),
        "PRICE_LEVEL_INEXPENSIVE" => Some(1),
        "PRICE_LEVEL_MODERATE" => Some(2),
        "PRICE_LEVEL_EXPENSIVE" => Some(3),
        "PRICE_LEVEL_VERY_EXPENSIVE" => Some(4),
        _ => None,
    }
}

pub struct PriceFitScorer {
    pub weight: f64,
}

impl Scorer for PriceFitScorer {
    fn name(&self) -> &'static str {
        "price_level"
    }

    fn score(&self, venue: &Venue, ctx: &RankContext) -> ScorerResult {
        let venue_ordinal = venue
            .price_level
            .as_deref()
            .and_then(venue_price_ordinal);
        let preferred_ordinal = ctx.preferred_price.ordinal();

        // Neutral when there is no preference or no venue price data.
        let score = match (venue_ordinal, preferred_ordinal) {
            (Some(venue_tier), Some(preferred_tier)) => {
                let delta = i16::from(venue_tier).abs_diff(i16::from(preferred_tier));
                (1.0 - 0.3 * f64::from(delta)).max(0.2)
            }
            _ => 0.5,
        };

        ScorerResult {
            rule: self.name().to_string(),
            score,
            weight: self.weight,
            weighted_score: score * self.weight,
            detail: format!(
                "venue_price={:?} preferred={:?}",
                venue.price_level, ctx.preferred_price
            ),
        }
    }
}
