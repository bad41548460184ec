use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub rating: f64,
    pub review_count: f64,
    pub open_now: f64,
    pub distance: f64,
    pub price_level: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            rating: 0.30,
            review_count: 0.20,
            open_now: 0.25,
            distance: 0.15,
            price_level: 0.10,
        }
    }
}

/// User's preferred price tier. `Any` disables the price sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricePreference {
    Inexpensive,
    Moderate,
    Expensive,
    #[default]
    Any,
}

impl PricePreference {
    /// Position on the provider's ordinal 0-4 price scale; None for `Any`.
    pub fn ordinal(self) -> Option<u8> {
        match self {
            PricePreference::Inexpensive => Some(1),
            PricePreference::Moderate => Some(2),
            PricePreference::Expensive => Some(3),
            PricePreference::Any => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringSettings {
    pub weights: ScoringWeights,
    pub preferred_price_level: PricePreference,
}
