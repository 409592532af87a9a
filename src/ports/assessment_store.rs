//! Assessment Store Port - the most-recent-result slot.
//!
//! Holds at most one record: the last completed pipeline run. Each save
//! replaces the previous record wholesale.

use async_trait::async_trait;

use crate::domain::assessment::ProcessedQuestion;

/// Errors that can occur in the assessment store.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentStoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Port for the most-recent-result slot.
#[async_trait]
pub trait AssessmentStore: Send + Sync {
    /// Replace the latest record.
    async fn save_latest(&self, record: ProcessedQuestion) -> Result<(), AssessmentStoreError>;

    /// Fetch the latest record, if a run has completed.
    async fn latest(&self) -> Result<Option<ProcessedQuestion>, AssessmentStoreError>;
}
