//! AssessmentPipeline - generate, probe, synthesize.
//!
//! Ten remote calls per run, strictly forward. A failed call degrades its
//! own slot to the fallback text and the run carries on; `run` never fails.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use super::{AssessmentSynthesizer, ProbeRunner, ResponseGenerator};
use crate::config::PipelineConfig;
use crate::domain::assessment::{PipelineOutput, PipelineStage, QuestionInput, StageFailure};
use crate::domain::foundation::StateMachine;
use crate::ports::AIProvider;

/// Output of one run plus the calls that degraded along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineRun {
    pub run_id: Uuid,
    pub output: PipelineOutput,
    pub failures: Vec<StageFailure>,
}

/// The three stages wired in sequence.
#[derive(Clone)]
pub struct AssessmentPipeline {
    generator: ResponseGenerator,
    prober: ProbeRunner,
    synthesizer: AssessmentSynthesizer,
}

impl AssessmentPipeline {
    /// Pipeline with the default sampling parameters and sequential probes.
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self::from_stages(
            ResponseGenerator::new(provider.clone()),
            ProbeRunner::new(provider.clone()),
            AssessmentSynthesizer::new(provider),
        )
    }

    pub fn from_config(provider: Arc<dyn AIProvider>, config: &PipelineConfig) -> Self {
        Self::from_stages(
            ResponseGenerator::new(provider.clone()).with_params(config.initial_params()),
            ProbeRunner::new(provider.clone())
                .with_params(config.probe_params())
                .with_concurrency(config.probe_concurrency),
            AssessmentSynthesizer::new(provider).with_params(config.final_params()),
        )
    }

    pub fn from_stages(
        generator: ResponseGenerator,
        prober: ProbeRunner,
        synthesizer: AssessmentSynthesizer,
    ) -> Self {
        Self {
            generator,
            prober,
            synthesizer,
        }
    }

    /// Run all three stages for `input`.
    pub async fn run(&self, input: &QuestionInput) -> PipelineRun {
        let run_id = Uuid::new_v4();
        let mut stage = PipelineStage::Idle;
        let mut failures = Vec::new();

        info!(%run_id, options = input.options().len(), "Pipeline run started");

        advance(run_id, &mut stage);
        let initial = self.generator.run(run_id, input).await;
        failures.extend(initial.failures);

        advance(run_id, &mut stage);
        let probing = self.prober.run(run_id, input.question(), &initial.value).await;
        failures.extend(probing.failures);

        advance(run_id, &mut stage);
        let analysis = self.synthesizer.analyze(&probing.value);
        let assessment = self
            .synthesizer
            .run(run_id, input.question(), &initial.value, &analysis)
            .await;
        failures.extend(assessment.failures);

        advance(run_id, &mut stage);
        debug_assert!(stage.is_terminal());

        info!(%run_id, failures = failures.len(), "Pipeline run finished");

        PipelineRun {
            run_id,
            output: PipelineOutput {
                question: input.question().to_string(),
                initial_response: initial.value,
                probing_results: probing.value,
                final_assessment: assessment.value,
            },
            failures,
        }
    }

    /// Run all three stages and keep only the output.
    pub async fn process(&self, input: &QuestionInput) -> PipelineOutput {
        self.run(input).await.output
    }
}

fn advance(run_id: Uuid, stage: &mut PipelineStage) {
    if let Some(next) = stage.next() {
        debug!(%run_id, from = %stage, to = %next, "Pipeline stage transition");
        *stage = next;
    }
}
