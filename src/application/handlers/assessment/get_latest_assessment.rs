//! GetLatestAssessmentHandler - Query handler for the most recent run.

use std::sync::Arc;

use crate::domain::assessment::ProcessedQuestion;
use crate::ports::{AssessmentStore, AssessmentStoreError};

/// Handler for retrieving the most recent processed question.
pub struct GetLatestAssessmentHandler {
    store: Arc<dyn AssessmentStore>,
}

impl GetLatestAssessmentHandler {
    pub fn new(store: Arc<dyn AssessmentStore>) -> Self {
        Self { store }
    }

    /// `None` until a run has completed.
    pub async fn handle(&self) -> Result<Option<ProcessedQuestion>, AssessmentStoreError> {
        self.store.latest().await
    }
}
