use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Dirichlet prior added to every evidence count.
    pub smoothing_alpha: f64,
    /// Lower clamp on log-scores; guards against unbounded negative drift,
    /// not a probability floor.
    pub log_floor: f64,
    /// Stop once the rank-1 probability reaches this.
    pub confidence_threshold: f64,
    /// Stop once rank-1 leads rank-2 by this much.
    pub gap_threshold: f64,
    /// How many top genres the question-scoring step considers.
    pub candidate_genres: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            smoothing_alpha: 1.0,
            log_floor: -100.0,
            confidence_threshold: 0.65,
            gap_threshold: 0.15,
            candidate_genres: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub max_questions: usize,
    /// The session never finishes before this many answers, even if the
    /// confidence thresholds are already met.
    pub min_questions: usize,
    /// Window size for the same-topic-in-a-row avoidance.
    pub recent_group_avoid: usize,
    pub top_results: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_questions: 12,
            min_questions: 3,
            recent_group_avoid: 2,
            top_results: 3,
        }
    }
}
