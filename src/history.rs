//! Summary history storage.
//!
//! The [`SummaryHistory`] trait is the narrow contract the surrounding
//! application needs from a document store: save a completed summary, list an
//! owner's records newest-first, delete one record. Implementations must be
//! `Send + Sync`; the shipped [`MemoryHistory`] keeps everything in process.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::core::models::SummaryRecord;
use crate::errors::SummarizeError;

#[async_trait]
pub trait SummaryHistory: Send + Sync {
    /// Persist a completed summary for `owner_id` and return the stored record.
    async fn save(
        &self,
        owner_id: &str,
        title: &str,
        original_text: &str,
        summary: &str,
    ) -> Result<SummaryRecord, SummarizeError>;

    /// All records belonging to `owner_id`, newest first.
    async fn list(&self, owner_id: &str) -> Result<Vec<SummaryRecord>, SummarizeError>;

    /// Delete one record by id. Returns whether a record was removed.
    async fn delete(&self, owner_id: &str, record_id: &str) -> Result<bool, SummarizeError>;
}

/// In-memory history, keyed by owner.
pub struct MemoryHistory {
    records: RwLock<HashMap<String, Vec<SummaryRecord>>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    fn lock_poisoned() -> SummarizeError {
        SummarizeError::HistoryError("history lock poisoned".to_string())
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SummaryHistory for MemoryHistory {
    async fn save(
        &self,
        owner_id: &str,
        title: &str,
        original_text: &str,
        summary: &str,
    ) -> Result<SummaryRecord, SummarizeError> {
        let record = SummaryRecord {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            original_text: original_text.to_string(),
            summary: summary.to_string(),
            created_at: Utc::now(),
        };

        let mut records = self.records.write().map_err(|_| Self::lock_poisoned())?;
        records
            .entry(owner_id.to_string())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn list(&self, owner_id: &str) -> Result<Vec<SummaryRecord>, SummarizeError> {
        let records = self.records.read().map_err(|_| Self::lock_poisoned())?;
        let mut out = records.get(owner_id).cloned().unwrap_or_default();
        // Insertion order is oldest-first; reversing keeps ties stable where
        // timestamp sorting alone would not.
        out.reverse();
        Ok(out)
    }

    async fn delete(&self, owner_id: &str, record_id: &str) -> Result<bool, SummarizeError> {
        let mut records = self.records.write().map_err(|_| Self::lock_poisoned())?;
        match records.get_mut(owner_id) {
            Some(owned) => {
                let before = owned.len();
                owned.retain(|r| r.id != record_id);
                Ok(owned.len() < before)
            }
            None => Ok(false),
        }
    }
}
