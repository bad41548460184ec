use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use umami_catalog::answers::AnswerId;
use umami_catalog::genres::Genre;
use umami_catalog::questions::Question;
use umami_common::error::{UmamiError, UmamiResult};

use crate::config::InferenceConfig;
use crate::likelihood::LikelihoodModel;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreResult {
    pub genre: Genre,
    pub probability: f64,
    /// Cosmetic, phrased for display. Not part of any equality contract.
    pub reason: String,
}

/// Per-session probability distribution over genres, maintained in log space
/// and renormalized after every answer.
#[derive(Debug)]
pub struct InferenceEngine {
    genres: Vec<Genre>,
    model: LikelihoodModel,
    config: InferenceConfig,
    log_scores: HashMap<String, f64>,
    reason_rng: StdRng,
}

impl InferenceEngine {
    pub fn new(
        genres: Vec<Genre>,
        model: LikelihoodModel,
        config: InferenceConfig,
    ) -> UmamiResult<Self> {
        Self::build(genres, model, config, StdRng::from_os_rng())
    }

    /// Deterministic reason phrasing for tests.
    pub fn with_reason_seed(
        genres: Vec<Genre>,
        model: LikelihoodModel,
        config: InferenceConfig,
        seed: u64,
    ) -> UmamiResult<Self> {
        Self::build(genres, model, config, StdRng::seed_from_u64(seed))
    }

    fn build(
        genres: Vec<Genre>,
        model: LikelihoodModel,
        config: InferenceConfig,
        reason_rng: StdRng,
    ) -> UmamiResult<Self> {
        if genres.is_empty() {
            return Err(UmamiError::Config(
                "inference engine needs at least one genre".into(),
            ));
        }
        let mut engine = Self {
            genres,
            model,
            config,
            log_scores: HashMap::new(),
            reason_rng,
        };
        engine.reset();
        Ok(engine)
    }

    /// Back to the uniform prior: every genre at ln(1/N).
    pub fn reset(&mut self) {
        let uniform = (1.0 / self.genres.len() as f64).ln();
        self.log_scores = self
            .genres
            .iter()
            .map(|g| (g.id.clone(), uniform))
            .collect();
    }

    /// Bayesian update: add the log-likelihood of the observed answer to
    /// every genre's score, clamp at the floor, renormalize.
    pub fn update(&mut self, question: &Question, answer_id: &str) {
        for genre in &self.genres {
            let likelihood = self.model.likelihood(&genre.id, &question.id, answer_id);
            if let Some(score) = self.log_scores.get_mut(&genre.id) {
                *score = (*score + likelihood.ln()).max(self.config.log_floor);
            }
        }
        self.normalize();
        debug!(question = %question.id, answer = answer_id, "genre scores updated");
    }

    /// Log-sum-exp normalization. Subtracting the max before exponentiating
    /// keeps the sum out of underflow territory for large genre counts.
    fn normalize(&mut self) {
        let max = self
            .log_scores
            .values()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let sum_exp: f64 = self.log_scores.values().map(|s| (s - max).exp()).sum();
        let log_sum_exp = max + sum_exp.ln();
        for score in self.log_scores.values_mut() {
            *score -= log_sum_exp;
        }
    }

    /// Genres with probabilities, highest first. Catalog order breaks ties,
    /// which keeps the ordering stable.
    fn ranked(&self) -> Vec<(&Genre, f64)> {
        let mut ranked: Vec<(&Genre, f64)> = self
            .genres
            .iter()
            .map(|g| {
                let log_score = self
                    .log_scores
                    .get(&g.id)
                    .copied()
                    .unwrap_or(self.config.log_floor);
                (g, log_score.exp())
            })
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }

    pub fn top_n(&mut self, n: usize) -> Vec<GenreResult> {
        let ranked: Vec<(Genre, f64)> = self
            .ranked()
            .into_iter()
            .take(n)
            .map(|(g, p)| (g.clone(), p))
            .collect();
        ranked
            .into_iter()
            .map(|(genre, probability)| {
                let reason = self.pick_reason(&genre);
                GenreResult {
                    genre,
                    probability,
                    reason,
                }
            })
            .collect()
    }

    /// Probability of the rank-1 genre.
    pub fn top_confidence(&self) -> f64 {
        self.ranked().first().map(|(_, p)| *p).unwrap_or(0.0)
    }

    /// Probability lead of rank-1 over rank-2; 1.0 with fewer than 2 genres.
    pub fn top1_top2_gap(&self) -> f64 {
        if self.genres.len() < 2 {
            return 1.0;
        }
        let ranked = self.ranked();
        ranked[0].1 - ranked[1].1
    }

    pub fn can_terminate_early(&self) -> bool {
        self.top_confidence() >= self.config.confidence_threshold
            || self.top1_top2_gap() >= self.config.gap_threshold
    }

    /// The k most probable genres. Used to restrict question scoring to the
    /// current front-runners, not to produce the final answer.
    pub fn top_genres(&self, k: usize) -> Vec<Genre> {
        self.ranked()
            .into_iter()
            .take(k)
            .map(|(g, _)| g.clone())
            .collect()
    }

    /// Front-runner pool for question scoring, sized by configuration.
    pub fn question_candidates(&self) -> Vec<Genre> {
        self.top_genres(self.config.candidate_genres)
    }

    /// How well a question discriminates among the candidate genres: the
    /// variance of heuristic likelihoods across genres, averaged over the
    /// five answer options. A proxy for expected information gain, not a
    /// true entropy-reduction calculation.
    pub fn question_information_score(&self, question: &Question, candidates: &[Genre]) -> f64 {
        let mut total = 0.0;
        for answer in AnswerId::ALL {
            let likelihoods: Vec<f64> = candidates
                .iter()
                .map(|g| self.model.heuristic(&g.id, &question.id, answer))
                .collect();
            total += variance(&likelihoods);
        }
        total / AnswerId::ALL.len() as f64
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    fn pick_reason(&mut self, genre: &Genre) -> String {
        let phrases = [
            format!("Feels like a {} kind of day", genre.name),
            "Matches your answers so far".to_string(),
            "Worth a look".to_string(),
        ];
        let idx = self.reason_rng.random_range(0..phrases.len());
        phrases[idx].clone()
    }
}

fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}
