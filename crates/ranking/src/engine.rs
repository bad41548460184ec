use tracing::debug;

use umami_store::location::Coordinates;
use umami_store::places::Venue;

use crate::config::ScoringSettings;
use crate::scorers::distance::DistanceScorer;
use crate::scorers::open_now::OpenNowScorer;
use crate::scorers::price::PriceFitScorer;
use crate::scorers::rating::RatingScorer;
use crate::scorers::reviews::ReviewVolumeScorer;
use crate::scorers::{RankContext, Scorer};
use crate::trace::{RankTrace, ScorerResult};

/// Default cap applied by `rank_top` when presenting results.
pub const MAX_RESULTS: usize = 10;

#[derive(Debug, Clone)]
pub struct RankedVenue {
    pub venue: Venue,
    pub score: f64,
    pub trace: RankTrace,
}

/// Score one venue: plain weighted sum of the five sub-scores. Weights need
/// not sum to 1; the trace records their sum for callers that want to
/// normalize for display.
pub fn evaluate(settings: &ScoringSettings, venue: &Venue, ctx: &RankContext) -> RankedVenue {
    let scorers: Vec<Box<dyn Scorer>> = vec![
        Box::new(RatingScorer {
            weight: settings.weights.rating,
        }),
        Box::new(ReviewVolumeScorer {
            weight: settings.weights.review_count,
        }),
        Box::new(OpenNowScorer {
            weight: settings.weights.open_now,
        }),
        Box::new(DistanceScorer {
            weight: settings.weights.distance,
        }),
        Box::new(PriceFitScorer {
            weight: settings.weights.price_level,
        }),
    ];

    let results: Vec<ScorerResult> = scorers.iter().map(|s| s.score(venue, ctx)).collect();

    let total: f64 = results.iter().map(|r| r.weighted_score).sum();
    let weight_sum: f64 = results.iter().map(|r| r.weight).sum();

    RankedVenue {
        venue: venue.clone(),
        score: total,
        trace: RankTrace {
            scorers: results,
            total,
            weight_sum,
        },
    }
}

/// Rank a candidate list, best first. Ties keep input order.
pub fn rank(
    settings: &ScoringSettings,
    venues: &[Venue],
    origin: Coordinates,
    radius_m: f64,
) -> Vec<RankedVenue> {
    let ctx = RankContext {
        origin,
        radius_m,
        preferred_price: settings.preferred_price_level,
    };
    let mut ranked: Vec<RankedVenue> = venues.iter().map(|v| evaluate(settings, v, &ctx)).collect();
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    debug!(candidates = venues.len(), "ranked venue candidates");
    ranked
}

pub fn rank_top(
    settings: &ScoringSettings,
    venues: &[Venue],
    origin: Coordinates,
    radius_m: f64,
    limit: usize,
) -> Vec<RankedVenue> {
    let mut ranked = rank(settings, venues, origin, radius_m);
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PricePreference, ScoringWeights};

    const ORIGIN: Coordinates = Coordinates {
        latitude: 35.6812,
        longitude: 139.7671,
    };
    const RADIUS_M: f64 = 1500.0;

    fn venue(id: &str) -> Venue {
        Venue {
            id: id.to_string(),
            name: id.to_string(),
            formatted_address: None,
            rating: None,
            review_count: None,
            price_level: None,
            coordinates: None,
            maps_uri: None,
            open_now: None,
            photo_url: None,
        }
    }

    fn ctx() -> RankContext {
        RankContext {
            origin: ORIGIN,
            radius_m: RADIUS_M,
            preferred_price: PricePreference::Any,
        }
    }

    /// Roughly `meters` north of ORIGIN (1 deg latitude ≈ 111.195 km).
    fn coords_at_distance(meters: f64) -> Coordinates {
        Coordinates {
            latitude: ORIGIN.latitude + meters / 111_195.0,
            longitude: ORIGIN.longitude,
        }
    }

    #[test]
    fn t01_dominating_venue_wins() {
        let settings = ScoringSettings::default();

        let mut best = venue("best");
        best.rating = Some(5.0);
        best.review_count = Some(1000);
        best.open_now = Some(true);
        best.coordinates = Some(ORIGIN);

        let mut worst = venue("worst");
        worst.rating = Some(3.0);
        worst.review_count = Some(0);
        worst.open_now = Some(false);
        worst.coordinates = Some(coords_at_distance(RADIUS_M));

        let best_score = evaluate(&settings, &best, &ctx()).score;
        let worst_score = evaluate(&settings, &worst, &ctx()).score;
        assert!(best_score > worst_score, "{best_score} <= {worst_score}");
    }

    #[test]
    fn t02_fully_specified_venue_total() {
        let settings = ScoringSettings::default();
        let mut v = venue("v");
        v.rating = Some(5.0);
        v.review_count = Some(1000);
        v.open_now = Some(true);
        v.coordinates = Some(ORIGIN);

        // rating 1.0*0.30 + reviews 1.0*0.20 + open 1.0*0.25
        //   + distance 1.0*0.15 + price 0.5*0.10 = 0.95
        let result = evaluate(&settings, &v, &ctx());
        assert!((result.score - 0.95).abs() < 1e-9, "score={}", result.score);
    }

    #[test]
    fn t03_missing_data_takes_documented_defaults() {
        let settings = ScoringSettings::default();
        let result = evaluate(&settings, &venue("bare"), &ctx());

        // rating (3.0/5)*0.30 + reviews 0*0.20 + open 0.5*0.25
        //   + distance 1.0*0.15 + price 0.5*0.10 = 0.505
        assert!((result.score - 0.505).abs() < 1e-9, "score={}", result.score);
    }

    #[test]
    fn t04_closed_venue_is_penalized_not_dropped() {
        let settings = ScoringSettings::default();
        let mut open = venue("open");
        open.open_now = Some(true);
        let mut closed = venue("closed");
        closed.open_now = Some(false);

        let open_score = evaluate(&settings, &open, &ctx()).score;
        let closed_score = evaluate(&settings, &closed, &ctx()).score;
        assert!(closed_score > 0.0);
        assert!(open_score > closed_score);
        // Only the open_now sub-score differs: (1.0 - 0.3) * 0.25
        assert!((open_score - closed_score - 0.175).abs() < 1e-9);
    }

    #[test]
    fn t05_distance_decays_linearly_inside_the_radius() {
        let settings = ScoringSettings::default();
        let near = RankContext {
            preferred_price: PricePreference::Any,
            ..ctx()
        };

        let mut at_origin = venue("at_origin");
        at_origin.coordinates = Some(ORIGIN);
        let mut halfway = venue("halfway");
        halfway.coordinates = Some(coords_at_distance(RADIUS_M / 2.0));
        let mut at_edge = venue("at_edge");
        at_edge.coordinates = Some(coords_at_distance(RADIUS_M));

        let score_of = |v: &Venue| {
            evaluate(&settings, v, &near)
                .trace
                .scorers
                .iter()
                .find(|s| s.rule == "distance")
                .map(|s| s.score)
                .unwrap()
        };

        assert!((score_of(&at_origin) - 1.0).abs() < 1e-6);
        assert!((score_of(&halfway) - 0.5).abs() < 1e-2);
        assert!(score_of(&at_edge) < 1e-2);
    }

    #[test]
    fn t06_price_fit_scales_with_tier_distance() {
        let settings = ScoringSettings {
            weights: ScoringWeights::default(),
            preferred_price_level: PricePreference::Moderate,
        };
        let price_ctx = RankContext {
            preferred_price: PricePreference::Moderate,
            ..ctx()
        };

        let price_score = |label: &str| {
            let mut v = venue("priced");
            v.price_level = Some(label.to_string());
            evaluate(&settings, &v, &price_ctx)
                .trace
                .scorers
                .iter()
                .find(|s| s.rule == "price_level")
                .map(|s| s.score)
                .unwrap()
        };

        // Exact tier match → 1.0; one tier off → 0.7; two → 0.4;
        // three or more floors at 0.2.
        assert!((price_score("PRICE_LEVEL_MODERATE") - 1.0).abs() < 1e-9);
        assert!((price_score("PRICE_LEVEL_EXPENSIVE") - 0.7).abs() < 1e-9);
        assert!((price_score("PRICE_LEVEL_FREE") - 0.4).abs() < 1e-9);
        let mut far = venue("far");
        far.price_level = Some("PRICE_LEVEL_VERY_EXPENSIVE".to_string());
        let far_ctx = RankContext {
            preferred_price: PricePreference::Inexpensive,
            ..ctx()
        };
        let far_result = evaluate(&settings, &far, &far_ctx);
        let far_score = far_result
            .trace
            .scorers
            .iter()
            .find(|s| s.rule == "price_level")
            .map(|s| s.score)
            .unwrap();
        assert!((far_score - 0.2).abs() < 1e-9, "score={far_score}");
    }

    #[test]
    fn t07_unnormalized_weights_are_accepted() {
        let settings = ScoringSettings {
            weights: ScoringWeights {
                rating: 2.0,
                review_count: 0.0,
                open_now: 0.0,
                distance: 0.0,
                price_level: 0.0,
            },
            preferred_price_level: PricePreference::Any,
        };
        let mut v = venue("v");
        v.rating = Some(4.0);
        v.coordinates = Some(ORIGIN);

        let result = evaluate(&settings, &v, &ctx());
        // (4.0/5.0) * 2.0
        assert!((result.score - 1.6).abs() < 1e-9);
        assert!((result.trace.weight_sum - 2.0).abs() < 1e-9);
    }

    #[test]
    fn t08_trace_lists_all_five_scorers() {
        let settings = ScoringSettings::default();
        let result = evaluate(&settings, &venue("v"), &ctx());
        assert_eq!(result.trace.scorers.len(), 5);
        let names: Vec<&str> = result
            .trace
            .scorers
            .iter()
            .map(|s| s.rule.as_str())
            .collect();
        assert!(names.contains(&"rating"));
        assert!(names.contains(&"review_count"));
        assert!(names.contains(&"open_now"));
        assert!(names.contains(&"distance"));
        assert!(names.contains(&"price_level"));
    }

    #[test]
    fn t09_rank_sorts_descending_and_truncates() {
        let settings = ScoringSettings::default();
        let mut good = venue("good");
        good.rating = Some(4.8);
        good.open_now = Some(true);
        let mut poor = venue("poor");
        poor.rating = Some(2.0);
        poor.open_now = Some(false);
        let middling = venue("middling");

        let venues = vec![poor, good, middling];
        let ranked = rank(&settings, &venues, ORIGIN, RADIUS_M);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].venue.id, "good");
        assert!(ranked[0].score >= ranked[1].score);
        assert!(ranked[1].score >= ranked[2].score);

        let top = rank_top(&settings, &venues, ORIGIN, RADIUS_M, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].venue.id, "good");
    }
}
