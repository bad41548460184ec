use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorerResult {
    pub rule: String,
    pub score: f64,
    pub weight: f64,
    pub weighted_score: f64,
    pub detail: String,
}

/// Per-venue breakdown of how the final score came together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankTrace {
    pub scorers: Vec<ScorerResult>,
    pub total: f64,
    /// Sum of the configured weights; recorded so callers can normalize the
    /// total for display when their weights do not sum to 1.
    pub weight_sum: f64,
}
