//! ProbeRunner - second stage, the fixed battery of follow-up questions.
//!
//! Each probe is an independent completion. Probes may be in flight
//! together (`concurrency` > 1), but results are always reassembled in
//! battery order and a failed probe only affects its own entry.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::info;
use uuid::Uuid;

use super::remote_call::{complete_text, settle};
use crate::domain::assessment::{
    prompts, ProbingResult, StageKind, StageReport, PROBE_QUESTIONS,
};
use crate::ports::{AIProvider, CompletionRequest, MessageRole, RequestMetadata, SamplingParams};

/// Runs every probe in [`PROBE_QUESTIONS`] against the initial response.
#[derive(Clone)]
pub struct ProbeRunner {
    provider: Arc<dyn AIProvider>,
    params: SamplingParams,
    concurrency: usize,
}

impl ProbeRunner {
    /// Output cap for each probe answer.
    pub const DEFAULT_MAX_TOKENS: u32 = 300;

    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider,
            params: SamplingParams::default().with_max_tokens(Self::DEFAULT_MAX_TOKENS),
            concurrency: 1,
        }
    }

    pub fn with_params(mut self, params: SamplingParams) -> Self {
        self.params = params;
        self
    }

    /// Probes in flight at once, clamped to `1..=PROBE_QUESTIONS.len()`.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.clamp(1, PROBE_QUESTIONS.len());
        self
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Probe the initial response within a pipeline run.
    pub async fn run(
        &self,
        run_id: Uuid,
        question: &str,
        initial_response: &str,
    ) -> StageReport<ProbingResult> {
        info!(
            %run_id,
            probes = PROBE_QUESTIONS.len(),
            concurrency = self.concurrency,
            "Probing initial response"
        );

        let provider = self.provider.as_ref();

        // Futures are built up front so the buffered stream owns them.
        let calls: Vec<_> = PROBE_QUESTIONS
            .into_iter()
            .enumerate()
            .map(|(index, probe)| {
                let request = CompletionRequest::new(RequestMetadata::for_probe(run_id, index))
                    .with_message(
                        MessageRole::User,
                        prompts::probing_prompt(question, initial_response, probe),
                    )
                    .with_sampling(self.params);
                async move { (probe, complete_text(provider, request).await) }
            })
            .collect();

        // `buffered` yields in submission order, whatever order calls finish in.
        let outcomes: Vec<_> = stream::iter(calls)
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut failures = Vec::new();
        let mut results = ProbingResult::new();
        for (probe, outcome) in outcomes {
            let answer = settle(outcome, StageKind::Probe, Some(probe), &mut failures);
            results.insert(probe, answer);
        }

        StageReport::with_failures(results, failures)
    }

    /// One answer per probe, keyed by probe text, in battery order.
    pub async fn probe(&self, question: &str, initial_response: &str) -> ProbingResult {
        self.run(Uuid::new_v4(), question, initial_response).await.value
    }
}
