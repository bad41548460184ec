use umami_catalog::answers::AnswerId;
use umami_catalog::traits::trait_value;
use umami_store::evidence::EvidenceCounts;

/// Returned for answer ids the model does not recognize: uninformative, not
/// an error.
pub const UNKNOWN_ANSWER_LIKELIHOOD: f64 = 0.2;

/// P(answer | genre, question). Blends learned evidence counts with the
/// static trait matrix: where any observation exists for the (genre,
/// question) pair, a Dirichlet-smoothed empirical probability wins;
/// otherwise a coarse alignment heuristic on the trait value applies.
#[derive(Debug, Clone)]
pub struct LikelihoodModel {
    counts: EvidenceCounts,
    alpha: f64,
}

impl LikelihoodModel {
    /// Model with no learned evidence; every lookup falls back to the
    /// trait-matrix heuristic.
    pub fn new(alpha: f64) -> Self {
        Self {
            counts: EvidenceCounts::new(),
            alpha,
        }
    }

    pub fn with_counts(counts: EvidenceCounts, alpha: f64) -> Self {
        Self { counts, alpha }
    }

    pub fn likelihood(&self, genre_id: &str, question_id: &str, answer_id: &str) -> f64 {
        let Some(answer) = AnswerId::parse(answer_id) else {
            return UNKNOWN_ANSWER_LIKELIHOOD;
        };

        if let Some(row) = self
            .counts
            .get(genre_id)
            .and_then(|questions| questions.get(question_id))
        {
            let total: u32 = row.values().sum();
            if total > 0 {
                let count = row.get(answer_id).copied().unwrap_or(0);
                let options = AnswerId::ALL.len() as f64;
                return (count as f64 + self.alpha) / (total as f64 + self.alpha * options);
            }
        }

        self.heuristic(genre_id, question_id, answer)
    }

    /// Trait-alignment fallback, also used directly by question scoring.
    pub fn heuristic(&self, genre_id: &str, question_id: &str, answer: AnswerId) -> f64 {
        let expected = trait_value(genre_id, question_id);
        let diff = (i16::from(answer.value()) - i16::from(expected)).unsigned_abs();
        alignment_for_diff(diff)
    }
}

/// Monotone non-increasing in `diff`; the exact constants are tuning, the
/// monotonicity is contract.
fn alignment_for_diff(diff: u16) -> f64 {
    match diff {
        0 => 0.90,
        1 => 0.60,
        2 => 0.30,
        _ => 0.10,
    }
}
