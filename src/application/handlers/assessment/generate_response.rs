//! ResponseGenerator - first stage, the model's initial answer.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use super::remote_call::{complete_text, settle};
use crate::domain::assessment::{prompts, QuestionInput, StageKind, StageReport};
use crate::ports::{AIProvider, CompletionRequest, MessageRole, RequestMetadata, SamplingParams};

/// Asks the model to pick one option, with brief reasoning.
#[derive(Clone)]
pub struct ResponseGenerator {
    provider: Arc<dyn AIProvider>,
    params: SamplingParams,
}

impl ResponseGenerator {
    /// Output cap for the initial answer.
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

    /// Generate the initial response within a pipeline run.
    pub async fn run(&self, run_id: Uuid, input: &QuestionInput) -> StageReport<String> {
        let prompt = prompts::initial_response_prompt(input.question(), input.options());
        let request = CompletionRequest::new(RequestMetadata::new(run_id, StageKind::Generate))
            .with_message(MessageRole::User, prompt)
            .with_sampling(self.params);

        info!(%run_id, options = input.options().len(), "Generating initial response");

        let mut failures = Vec::new();
        let outcome = complete_text(self.provider.as_ref(), request).await;
        let text = settle(outcome, StageKind::Generate, None, &mut failures);
        StageReport::with_failures(text, failures)
    }

    /// The model's answer verbatim, or the fallback text on failure.
    pub async fn generate(&self, input: &QuestionInput) -> String {
        self.run(Uuid::new_v4(), input).await.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::assessment::NO_VALID_RESPONSE;

    fn fever_question() -> QuestionInput {
        QuestionInput::new(
            "Patient presents with fever and rash",
            [("A", "Measles"), ("B", "Rubella")],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn returns_model_text_unmodified() {
        let text = "A: Measles.\n- Koplik spots\n- prodrome  ";
        let provider = Arc::new(MockAIProvider::answering(text));
        let generator = ResponseGenerator::new(provider);

        assert_eq!(generator.generate(&fever_question()).await, text);
    }

    #[tokio::test]
    async fn failure_yields_fallback_text() {
        let provider = Arc::new(MockAIProvider::failing(MockError::Network {
            message: "connection refused".to_string(),
        }));
        let generator = ResponseGenerator::new(provider);

        let report = generator.run(Uuid::nil(), &fever_question()).await;

        assert_eq!(report.value, NO_VALID_RESPONSE);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].stage, StageKind::Generate);
        assert_eq!(report.failures[0].code, "network");
        assert!(report.failures[0].probe.is_none());
    }

    #[tokio::test]
    async fn sends_single_user_prompt_with_default_sampling() {
        let provider = Arc::new(MockAIProvider::answering("A"));
        let generator = ResponseGenerator::new(provider.clone());

        generator.run(Uuid::nil(), &fever_question()).await;

        let calls = provider.get_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].messages.len(), 1);
        assert_eq!(calls[0].max_tokens, Some(500));
        assert_eq!(calls[0].temperature, Some(0.5));
        assert_eq!(calls[0].top_p, Some(1.0));
        assert_eq!(calls[0].metadata.stage, StageKind::Generate);

        let prompt = calls[0].prompt().unwrap();
        assert!(prompt.starts_with(
            "Question:\nPatient presents with fever and rash\n\nOptions:\nA: Measles\nB: Rubella\n\n"
        ));
    }

    #[tokio::test]
    async fn empty_options_leave_options_section_empty() {
        let provider = Arc::new(MockAIProvider::answering("A"));
        let generator = ResponseGenerator::new(provider.clone());
        let input = QuestionInput::new("Q", Vec::<(&str, &str)>::new()).unwrap();

        generator.generate(&input).await;

        let prompt = provider.get_calls()[0].prompt().unwrap().to_string();
        assert!(prompt.starts_with("Question:\nQ\n\nOptions:\n\n\n"));
    }
}
