use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tracing::debug;

use umami_catalog::answers::AnswerId;
use umami_catalog::conflicts::conflicting_questions;
use umami_catalog::questions::{Question, QuestionGroup};

use crate::config::SessionConfig;
use crate::engine::InferenceEngine;
use crate::session::QuestionAnswer;

/// How many of the best-scoring questions the randomized tie-break picks among.
const TIE_BREAK_POOL: usize = 3;

/// Session-scoped question picking: skips answered and excluded questions,
/// avoids repeating recent topic groups, and (once the engine has evidence)
/// prefers the questions that best discriminate among the current
/// front-runner genres.
#[derive(Debug)]
pub struct QuestionSelector {
    questions: Vec<Question>,
    answered: HashSet<String>,
    excluded: HashSet<String>,
    recent_groups: Vec<QuestionGroup>,
    config: SessionConfig,
    rng: StdRng,
}

impl QuestionSelector {
    pub fn new(questions: Vec<Question>, config: SessionConfig) -> Self {
        Self::build(questions, config, StdRng::from_os_rng())
    }

    /// Deterministic selection order for tests.
    pub fn with_seed(questions: Vec<Question>, config: SessionConfig, seed: u64) -> Self {
        Self::build(questions, config, StdRng::seed_from_u64(seed))
    }

    fn build(questions: Vec<Question>, config: SessionConfig, rng: StdRng) -> Self {
        Self {
            questions,
            answered: HashSet::new(),
            excluded: HashSet::new(),
            recent_groups: Vec::new(),
            config,
            rng,
        }
    }

    /// Enabled questions not yet answered and not excluded by a conflict.
    pub fn available_questions(&self) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| {
                q.enabled && !self.answered.contains(&q.id) && !self.excluded.contains(&q.id)
            })
            .collect()
    }

    /// Pick the next question, or None when the pool is exhausted (the
    /// caller should move to results).
    pub fn next_question(
        &mut self,
        answers: &[QuestionAnswer],
        engine: Option<&InferenceEngine>,
    ) -> Option<Question> {
        let available: Vec<Question> = self
            .available_questions()
            .into_iter()
            .cloned()
            .collect();
        if available.is_empty() {
            return None;
        }

        self.update_recent_groups(answers);

        // Topic diversity is a soft preference: fall back to the full pool
        // rather than returning nothing.
        let preferred: Vec<Question> = available
            .iter()
            .filter(|q| !self.recent_groups.contains(&q.group))
            .cloned()
            .collect();
        let candidates = if preferred.is_empty() {
            available
        } else {
            preferred
        };

        if let Some(engine) = engine {
            if !answers.is_empty() {
                return Some(self.pick_informative(candidates, engine));
            }
        }

        let idx = self.rng.random_range(0..candidates.len());
        Some(candidates[idx].clone())
    }

    /// Score candidates against the engine's current front-runners and pick
    /// uniformly among the best few.
    fn pick_informative(&mut self, candidates: Vec<Question>, engine: &InferenceEngine) -> Question {
        let top_genres = engine.question_candidates();
        let mut scored: Vec<(f64, Question)> = candidates
            .into_iter()
            .map(|q| (engine.question_information_score(&q, &top_genres), q))
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        let pool = scored.len().min(TIE_BREAK_POOL);
        let idx = self.rng.random_range(0..pool);
        debug!(
            question = %scored[idx].1.id,
            score = scored[idx].0,
            "selected informative question"
        );
        scored.swap_remove(idx).1
    }

    /// Record an answer: marks the question answered and, on a confident
    /// affirmative, permanently excludes its conflicting questions. Only the
    /// answer being recorded is consulted; history is not re-evaluated.
    pub fn record_answer(&mut self, question_id: &str, answer: AnswerId) {
        self.mark_answered(question_id);
        if answer.is_affirmative() {
            for target in conflicting_questions(question_id) {
                if self.excluded.insert((*target).to_string()) {
                    debug!(question = question_id, excluded = target, "conflict exclusion");
                }
            }
        }
    }

    pub fn mark_answered(&mut self, question_id: &str) {
        self.answered.insert(question_id.to_string());
    }

    /// Undo support. Deliberately does not revert exclusions the answer may
    /// have caused; the exclusion set only grows within a session.
    pub fn unmark_answered(&mut self, question_id: &str) {
        self.answered.remove(question_id);
    }

    pub fn excluded_questions(&self) -> &HashSet<String> {
        &self.excluded
    }

    pub fn reset(&mut self) {
        self.answered.clear();
        self.excluded.clear();
        self.recent_groups.clear();
    }

    pub fn should_continue(&self, answered_count: usize) -> bool {
        answered_count < self.config.max_questions
    }

    fn update_recent_groups(&mut self, answers: &[QuestionAnswer]) {
        let window = self.config.recent_group_avoid;
        let start = answers.len().saturating_sub(window);
        self.recent_groups = answers[start..]
            .iter()
            .filter_map(|a| {
                self.questions
                    .iter()
                    .find(|q| q.id == a.question_id)
                    .map(|q| q.group)
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use umami_catalog::questions::enabled_questions;

    fn selector_with_seed(seed: u64) -> QuestionSelector {
        QuestionSelector::with_seed(enabled_questions(), SessionConfig::default(), seed)
    }

    fn answered(question_id: &str, answer: AnswerId) -> QuestionAnswer {
        QuestionAnswer {
            question_id: question_id.to_string(),
            answer_id: answer,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn first_question_comes_from_full_pool() {
        let mut selector = selector_with_seed(1);
        let q = selector.next_question(&[], None).expect("pool not empty");
        assert!(q.enabled);
    }

    #[test]
    fn answered_questions_are_not_reasked() {
        let mut selector = selector_with_seed(2);
        let total = selector.available_questions().len();

        let q = selector.next_question(&[], None).unwrap();
        selector.record_answer(&q.id, AnswerId::Unknown);
        assert_eq!(selector.available_questions().len(), total - 1);
        assert!(selector
            .available_questions()
            .iter()
            .all(|candidate| candidate.id != q.id));
    }

    #[test]
    fn confident_affirmative_triggers_exclusions() {
        let mut selector = selector_with_seed(3);
        selector.record_answer("q_cold_dish", AnswerId::Yes);
        assert!(selector.excluded_questions().contains("q_hot_dish"));
        assert!(selector.excluded_questions().contains("q_soup_warmup"));
        assert!(selector
            .available_questions()
            .iter()
            .all(|q| q.id != "q_hot_dish" && q.id != "q_soup_warmup"));
    }

    #[test]
    fn negative_or_unsure_answers_exclude_nothing() {
        let mut selector = selector_with_seed(4);
        selector.record_answer("q_cold_dish", AnswerId::No);
        selector.record_answer("q_spicy", AnswerId::Unknown);
        assert!(selector.excluded_questions().is_empty());
    }

    #[test]
    fn exclusions_are_deterministic_for_a_fixed_sequence() {
        let sequence = [
            ("q_cold_dish", AnswerId::Yes),
            ("q_light_meal", AnswerId::ProbYes),
            ("q_spicy", AnswerId::No),
        ];

        let mut a = selector_with_seed(5);
        let mut b = selector_with_seed(99);
        for (qid, answer) in sequence {
            a.record_answer(qid, answer);
            b.record_answer(qid, answer);
        }
        // Different RNG seeds, identical answers: the exclusion set must match.
        assert_eq!(a.excluded_questions(), b.excluded_questions());
    }

    #[test]
    fn undo_restores_the_question_but_not_exclusions() {
        let mut selector = selector_with_seed(6);
        selector.record_answer("q_cold_dish", AnswerId::Yes);
        selector.unmark_answered("q_cold_dish");

        assert!(selector
            .available_questions()
            .iter()
            .any(|q| q.id == "q_cold_dish"));
        // The exclusion caused by the undone answer stays.
        assert!(selector.excluded_questions().contains("q_hot_dish"));
    }

    #[test]
    fn recent_groups_are_avoided_when_possible() {
        let mut selector = selector_with_seed(7);
        let answers = vec![
            answered("q_hot_dish", AnswerId::Yes),
            answered("q_refreshing", AnswerId::No),
        ];
        selector.mark_answered("q_hot_dish");
        selector.mark_answered("q_refreshing");

        // Both recent answers are temperature questions; with the whole rest
        // of the bank available the next pick must leave the group.
        for _ in 0..10 {
            let q = selector.next_question(&answers, None).unwrap();
            assert_ne!(q.group, QuestionGroup::Temperature);
        }
    }

    #[test]
    fn reset_clears_all_session_state() {
        let mut selector = selector_with_seed(8);
        let total = selector.available_questions().len();
        selector.record_answer("q_cold_dish", AnswerId::Yes);
        selector.record_answer("q_big_portion", AnswerId::Yes);

        selector.reset();
        assert_eq!(selector.available_questions().len(), total);
        assert!(selector.excluded_questions().is_empty());
    }

    #[test]
    fn should_continue_respects_the_cap() {
        let selector = selector_with_seed(9);
        assert!(selector.should_continue(0));
        assert!(selector.should_continue(11));
        assert!(!selector.should_continue(12));
        assert!(!selector.should_continue(13));
    }

    #[test]
    fn exhausted_pool_returns_none() {
        let mut selector = selector_with_seed(10);
        for q in enabled_questions() {
            selector.mark_answered(&q.id);
        }
        assert!(selector.next_question(&[], None).is_none());
    }

    #[test]
    fn seeded_selection_is_reproducible() {
        let mut a = selector_with_seed(42);
        let mut b = selector_with_seed(42);
        for _ in 0..5 {
            let qa = a.next_question(&[], None).unwrap();
            let qb = b.next_question(&[], None).unwrap();
            assert_eq!(qa.id, qb.id);
            a.mark_answered(&qa.id);
            b.mark_answered(&qb.id);
        }
    }
}
