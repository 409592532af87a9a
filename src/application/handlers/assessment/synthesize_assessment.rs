//! AssessmentSynthesizer - third stage, the final answer.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use super::remote_call::{complete_text, settle};
use crate::domain::assessment::{
    analyze, prompts, AnalysisMap, ProbingResult, StageKind, StageReport,
};
use crate::ports::{AIProvider, CompletionRequest, MessageRole, RequestMetadata, SamplingParams};

/// Turns probe answers into analyses and asks for a final assessment.
#[derive(Clone)]
pub struct AssessmentSynthesizer {
    provider: Arc<dyn AIProvider>,
    params: SamplingParams,
}

impl AssessmentSynthesizer {
    /// Output cap for the final assessment.
    pub const DEFAULT_MAX_TOKENS: u32 = 500;

    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider,
            params: SamplingParams::default().with_max_tokens(Self::DEFAULT_MAX_TOKENS),
        }
    }

    pub fn with_params(mut self, params: SamplingParams) -> Self {
        self.params = params;
        self
    }

    /// Wrap each probe answer as an analysis. No remote call.
    pub fn analyze(&self, results: &ProbingResult) -> AnalysisMap {
        analyze(results)
    }

    /// Synthesize the final assessment within a pipeline run.
    pub async fn run(
        &self,
        run_id: Uuid,
        question: &str,
        initial_response: &str,
        analysis: &AnalysisMap,
    ) -> StageReport<String> {
        let prompt = prompts::final_assessment_prompt(question, initial_response, analysis);
        let request = CompletionRequest::new(RequestMetadata::new(run_id, StageKind::Synthesize))
            .with_message(MessageRole::User, prompt)
            .with_sampling(self.params);

        info!(%run_id, analyses = analysis.len(), "Synthesizing final assessment");

        let mut failures = Vec::new();
        let outcome = complete_text(self.provider.as_ref(), request).await;
        let text = settle(outcome, StageKind::Synthesize, None, &mut failures);
        StageReport::with_failures(text, failures)
    }

    /// The final assessment text, or the fallback text on failure.
    pub async fn synthesize(
        &self,
        question: &str,
        initial_response: &str,
        analysis: &AnalysisMap,
    ) -> String {
        self.run(Uuid::new_v4(), question, initial_response, analysis)
            .await
            .value
    }
}
