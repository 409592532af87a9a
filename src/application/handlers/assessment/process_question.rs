//! ProcessQuestionHandler - Command handler that runs the pipeline and
//! records the result as the most recent assessment.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::info;

use super::AssessmentPipeline;
use crate::domain::assessment::{ProcessedQuestion, QuestionInput};
use crate::domain::foundation::ValidationError;
use crate::ports::{AssessmentStore, AssessmentStoreError};

/// Command to process one multiple-choice question.
#[derive(Debug, Clone)]
pub struct ProcessQuestionCommand {
    pub question: String,
    /// `(label, text)` pairs in display order.
    pub options: Vec<(String, String)>,
}

/// Errors from processing a question.
///
/// Remote call failures never surface here; they degrade inside the run.
#[derive(Debug, Error)]
pub enum ProcessQuestionError {
    #[error("Invalid question: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to record assessment: {0}")]
    Store(#[from] AssessmentStoreError),
}

/// Handler for processing questions.
pub struct ProcessQuestionHandler {
    pipeline: AssessmentPipeline,
    store: Arc<dyn AssessmentStore>,
}

impl ProcessQuestionHandler {
    pub fn new(pipeline: AssessmentPipeline, store: Arc<dyn AssessmentStore>) -> Self {
        Self { pipeline, store }
    }

    pub async fn handle(
        &self,
        cmd: ProcessQuestionCommand,
    ) -> Result<ProcessedQuestion, ProcessQuestionError> {
        // 1. Validate input
        if cmd.question.trim().is_empty() {
            return Err(ValidationError::empty_field("question").into());
        }
        let input = QuestionInput::new(cmd.question, cmd.options)?;
        info!(
            options = input.options().len(),
            populated_options = input.populated_options(),
            "Processing question"
        );

        // 2. Run the pipeline
        let run = self.pipeline.run(&input).await;

        // 3. Replace the most recent record
        let record = ProcessedQuestion {
            run_id: run.run_id,
            completed_at: Utc::now(),
            output: run.output,
            failures: run.failures,
        };
        self.store.save_latest(record.clone()).await?;

        Ok(record)
    }
}
