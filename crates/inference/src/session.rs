use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use umami_catalog::answers::AnswerId;
use umami_catalog::genres::Genre;
use umami_catalog::questions::Question;
use umami_catalog::{enabled_genres, enabled_questions, validate};
use umami_common::error::{UmamiError, UmamiResult};
use umami_store::evidence::{EvidenceCounts, EvidenceRecord};

use crate::config::{InferenceConfig, SessionConfig};
use crate::engine::{GenreResult, InferenceEngine};
use crate::likelihood::LikelihoodModel;
use crate::selector::QuestionSelector;

/// One entry of the append-only session answer log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question_id: String,
    pub answer_id: AnswerId,
    pub timestamp: DateTime<Utc>,
}

/// Drives one quiz: pick a question, take the answer, update the
/// distribution, repeat until a stop condition. Sessions are independent;
/// construct one per user flow and drop it when done.
#[derive(Debug)]
pub struct QuizSession {
    id: Uuid,
    engine: InferenceEngine,
    selector: QuestionSelector,
    questions: Vec<Question>,
    answers: Vec<QuestionAnswer>,
    config: SessionConfig,
}

impl QuizSession {
    pub fn new(
        genres: Vec<Genre>,
        questions: Vec<Question>,
        model: LikelihoodModel,
        inference_config: InferenceConfig,
        session_config: SessionConfig,
    ) -> UmamiResult<Self> {
        let engine = InferenceEngine::new(genres, model, inference_config)?;
        let selector = QuestionSelector::new(questions.clone(), session_config.clone());
        Ok(Self {
            id: Uuid::new_v4(),
            engine,
            selector,
            questions,
            answers: Vec::new(),
            config: session_config,
        })
    }

    /// Fully deterministic session (engine reasons and selector tie-breaks)
    /// for tests.
    pub fn with_seed(
        genres: Vec<Genre>,
        questions: Vec<Question>,
        model: LikelihoodModel,
        inference_config: InferenceConfig,
        session_config: SessionConfig,
        seed: u64,
    ) -> UmamiResult<Self> {
        let engine = InferenceEngine::with_reason_seed(genres, model, inference_config, seed)?;
        let selector =
            QuestionSelector::with_seed(questions.clone(), session_config.clone(), seed);
        Ok(Self {
            id: Uuid::new_v4(),
            engine,
            selector,
            questions,
            answers: Vec::new(),
            config: session_config,
        })
    }

    /// Session over the shipped catalog, with evidence counts loaded from
    /// the store beforehand. Validates the catalog tables first; a broken
    /// catalog fails here rather than mid-quiz.
    pub fn from_catalog(counts: EvidenceCounts) -> UmamiResult<Self> {
        validate()?;
        let inference_config = InferenceConfig::default();
        let model = LikelihoodModel::with_counts(counts, inference_config.smoothing_alpha);
        Self::new(
            enabled_genres(),
            enabled_questions(),
            model,
            inference_config,
            SessionConfig::default(),
        )
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn answers(&self) -> &[QuestionAnswer] {
        &self.answers
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Next question to present, or None when the quiz is over (question cap
    /// reached or pool exhausted).
    pub fn next_question(&mut self) -> Option<Question> {
        if !self.selector.should_continue(self.answers.len()) {
            return None;
        }
        let engine = if self.answers.is_empty() {
            None
        } else {
            Some(&self.engine)
        };
        self.selector.next_question(&self.answers, engine)
    }

    /// Record an answer and update the distribution.
    pub fn submit_answer(&mut self, question_id: &str, answer_id: &str) -> UmamiResult<()> {
        if !self.selector.should_continue(self.answers.len()) {
            return Err(UmamiError::Validation(format!(
                "session already has {} answers",
                self.answers.len()
            )));
        }
        let question = self
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .cloned()
            .ok_or_else(|| UmamiError::NotFound(format!("question {question_id}")))?;
        let answer = AnswerId::parse(answer_id)
            .ok_or_else(|| UmamiError::Validation(format!("unknown answer id {answer_id}")))?;

        self.engine.update(&question, answer_id);
        self.selector.record_answer(question_id, answer);
        self.answers.push(QuestionAnswer {
            question_id: question_id.to_string(),
            answer_id: answer,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// Remove the most recent answer and rebuild the distribution from the
    /// remaining log. Conflict exclusions caused by the undone answer are
    /// not reverted; the exclusion set only grows within a session.
    pub fn undo_last(&mut self) -> Option<QuestionAnswer> {
        let undone = self.answers.pop()?;
        self.selector.unmark_answered(&undone.question_id);

        self.engine.reset();
        for answer in &self.answers {
            if let Some(question) = self.questions.iter().find(|q| q.id == answer.question_id) {
                self.engine.update(question, answer.answer_id.as_str());
            }
        }
        Some(undone)
    }

    /// True while more questions may be asked.
    pub fn should_continue(&self) -> bool {
        self.selector.should_continue(self.answers.len())
    }

    /// True once the distribution is confident enough to stop, but never
    /// before the minimum number of answers.
    pub fn can_finish(&self) -> bool {
        self.answers.len() >= self.config.min_questions && self.engine.can_terminate_early()
    }

    pub fn top_results(&mut self) -> Vec<GenreResult> {
        self.engine.top_n(self.config.top_results)
    }

    pub fn top_results_n(&mut self, n: usize) -> Vec<GenreResult> {
        self.engine.top_n(n)
    }

    /// Evidence records for the genre the user ended up choosing; persisted
    /// out-of-band after the session.
    pub fn learning_records(&self, chosen_genre_id: &str) -> Vec<EvidenceRecord> {
        self.answers
            .iter()
            .map(|a| EvidenceRecord {
                genre_id: chosen_genre_id.to_string(),
                question_id: a.question_id.clone(),
                answer_id: a.answer_id.as_str().to_string(),
                recorded_at: a.timestamp,
            })
            .collect()
    }

    pub fn reset(&mut self) {
        self.engine.reset();
        self.selector.reset();
        self.answers.clear();
        info!(session = %self.id, "session reset");
    }
}
