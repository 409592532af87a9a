//! In-Memory Assessment Store Adapter
//!
//! Keeps the most recent processed question in process memory. Gone when
//! the process exits.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::ProcessedQuestion;
use crate::ports::{AssessmentStore, AssessmentStoreError};

/// In-memory most-recent-result slot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentStore {
    latest: Arc<RwLock<Option<ProcessedQuestion>>>,
}

impl InMemoryAssessmentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AssessmentStore for InMemoryAssessmentStore {
    async fn save_latest(&self, record: ProcessedQuestion) -> Result<(), AssessmentStoreError> {
        *self.latest.write().await = Some(record);
        Ok(())
    }

    async fn latest(&self) -> Result<Option<ProcessedQuestion>, AssessmentStoreError> {
        Ok(self.latest.read().await.clone())
    }
}
