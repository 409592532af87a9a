//! Integration tests for the assessment pipeline through the public API.

use std::sync::Arc;

use clinical_probe::adapters::ai::{MockAIProvider, MockError, MockResponse};
use clinical_probe::application::{AssessmentPipeline, ResponseGenerator};
use clinical_probe::config::PipelineConfig;
use clinical_probe::domain::assessment::{
    analyze, ProbingResult, QuestionInput, ANALYSIS_PREFIX, NO_VALID_RESPONSE, PROBE_QUESTIONS,
};

fn question(options: &[(&str, &str)]) -> QuestionInput {
    QuestionInput::new("Which drug is first-line for anaphylaxis?", options.to_vec()).unwrap()
}

#[tokio::test]
async fn one_to_five_options_always_yield_eight_probes() {
    let labels = ["A", "B", "C", "D", "E"];
    for count in 1..=labels.len() {
        let options: Vec<(&str, &str)> = labels[..count].iter().map(|l| (*l, "drug")).collect();
        let pipeline = AssessmentPipeline::new(Arc::new(MockAIProvider::answering("A")));

        let output = pipeline.process(&question(&options)).await;

        let probes: Vec<&str> = output.probing_results.probes().collect();
        assert_eq!(probes, PROBE_QUESTIONS.to_vec(), "with {} options", count);
    }
}

#[tokio::test]
async fn generate_returns_provider_text_exactly() {
    let text = "B: Epinephrine IM\n\n* fastest onset\n* reverses bronchospasm";
    let generator = ResponseGenerator::new(Arc::new(MockAIProvider::answering(text)));

    let response = generator
        .generate(&question(&[("A", "Diphenhydramine"), ("B", "Epinephrine")]))
        .await;

    assert_eq!(response, text);
}

#[tokio::test]
async fn intermittent_failures_degrade_only_their_slots() {
    let provider = MockAIProvider::new()
        .with_response("B")
        .with_response("probe 1")
        .with_error(MockError::Timeout { timeout_secs: 120 })
        .with_response("probe 3")
        .with_fallback(MockResponse::Success {
            content: "rest".to_string(),
        });
    let pipeline = AssessmentPipeline::new(Arc::new(provider));

    let run = pipeline.run(&question(&[("A", "x"), ("B", "y")])).await;

    assert_eq!(run.output.initial_response, "B");
    assert_eq!(run.output.probing_results.get(PROBE_QUESTIONS[1]), Some(NO_VALID_RESPONSE));
    assert_eq!(run.output.probing_results.get(PROBE_QUESTIONS[2]), Some("probe 3"));
    assert_eq!(run.output.final_assessment, "rest");
    assert_eq!(run.failures.len(), 1);
    assert_eq!(run.failures[0].code, "timeout");
}

#[tokio::test]
async fn parallel_probes_match_sequential_output() {
    let input = question(&[("A", "x"), ("B", "y")]);
    let sequential = AssessmentPipeline::new(Arc::new(MockAIProvider::answering("same")));
    let parallel = AssessmentPipeline::from_config(
        Arc::new(MockAIProvider::answering("same")),
        &PipelineConfig {
            probe_concurrency: 8,
            ..Default::default()
        },
    );

    let a = sequential.process(&input).await;
    let b = parallel.process(&input).await;

    assert_eq!(a, b);
}

#[test]
fn analyze_wraps_every_answer_in_order() {
    let results: ProbingResult = PROBE_QUESTIONS
        .iter()
        .map(|p| (*p, format!("answer to {}", p)))
        .collect();

    let analysis = analyze(&results);

    assert_eq!(analysis.len(), PROBE_QUESTIONS.len());
    for ((probe, text), expected_probe) in analysis.iter().zip(PROBE_QUESTIONS) {
        assert_eq!(probe, expected_probe);
        assert_eq!(text, format!("{}answer to {}", ANALYSIS_PREFIX, probe));
    }
}
