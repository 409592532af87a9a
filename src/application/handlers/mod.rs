//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{
    // Pipeline stages
    AssessmentPipeline,
    AssessmentSynthesizer,
    PipelineRun,
    ProbeRunner,
    ResponseGenerator,
    // Commands and queries
    GetLatestAssessmentHandler,
    ProcessQuestionCommand,
    ProcessQuestionError,
    ProcessQuestionHandler,
};
