use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use umami_common::error::UmamiResult;

/// counts\[genre_id\]\[question_id\]\[answer_id\] = occurrences across past sessions.
pub type EvidenceCounts = HashMap<String, HashMap<String, HashMap<String, u32>>>;

/// One (genre, question, answer) observation from a concluded session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    pub genre_id: String,
    pub question_id: String,
    pub answer_id: String,
    pub recorded_at: DateTime<Utc>,
}

/// Durable counter store for past-session answers. Reads feed the likelihood
/// model; writes happen out-of-band after a session concludes.
#[async_trait]
pub trait EvidenceStore: Send + Sync {
    /// Aggregate all records into nested counts.
    async fn get_counts(&self) -> UmamiResult<EvidenceCounts>;

    async fn append(&self, records: &[EvidenceRecord]) -> UmamiResult<()>;

    async fn record_count(&self) -> UmamiResult<u64>;

    async fn reset(&self) -> UmamiResult<()>;
}

/// In-memory store. The only implementation shipped here; durable backends
/// live with the host application.
#[derive(Debug, Default)]
pub struct InMemoryEvidenceStore {
    records: RwLock<Vec<EvidenceRecord>>,
}

impl InMemoryEvidenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EvidenceStore for InMemoryEvidenceStore {
    async fn get_counts(&self) -> UmamiResult<EvidenceCounts> {
        let records = self.records.read().await;
        let mut counts: EvidenceCounts = HashMap::new();
        for record in records.iter() {
            *counts
                .entry(record.genre_id.clone())
                .or_default()
                .entry(record.question_id.clone())
                .or_default()
                .entry(record.answer_id.clone())
                .or_default() += 1;
        }
        Ok(counts)
    }

    async fn append(&self, new_records: &[EvidenceRecord]) -> UmamiResult<()> {
        let mut records = self.records.write().await;
        records.extend_from_slice(new_records);
        Ok(())
    }

    async fn record_count(&self) -> UmamiResult<u64> {
        Ok(self.records.read().await.len() as u64)
    }

    async fn reset(&self) -> UmamiResult<()> {
        self.records.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(genre: &str, question: &str, answer: &str) -> EvidenceRecord {
        EvidenceRecord {
            genre_id: genre.to_string(),
            question_id: question.to_string(),
            answer_id: answer.to_string(),
            recorded_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn counts_aggregate_by_triple() {
        let store = InMemoryEvidenceStore::new();
        store
            .append(&[
                record("ramen_shoyu", "q_hot_dish", "YES"),
                record("ramen_shoyu", "q_hot_dish", "YES"),
                record("ramen_shoyu", "q_hot_dish", "NO"),
                record("sushi", "q_cold_dish", "YES"),
            ])
            .await
            .expect("append should succeed");

        let counts = store.get_counts().await.expect("counts should succeed");
        assert_eq!(counts["ramen_shoyu"]["q_hot_dish"]["YES"], 2);
        assert_eq!(counts["ramen_shoyu"]["q_hot_dish"]["NO"], 1);
        assert_eq!(counts["sushi"]["q_cold_dish"]["YES"], 1);
    }

    #[tokio::test]
    async fn empty_store_yields_empty_counts() {
        let store = InMemoryEvidenceStore::new();
        let counts = store.get_counts().await.expect("counts should succeed");
        assert!(counts.is_empty());
        assert_eq!(store.record_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn reset_clears_records() {
        let store = InMemoryEvidenceStore::new();
        store
            .append(&[record("udon", "q_soupy", "PROB_YES")])
            .await
            .expect("append should succeed");
        assert_eq!(store.record_count().await.unwrap(), 1);

        store.reset().await.expect("reset should succeed");
        assert_eq!(store.record_count().await.unwrap(), 0);
    }
}
