//! Assessment domain - the data shapes flowing through the
//! generate → probe → synthesize chain.
//!
//! Nothing in here talks to a model. Stages in the application layer
//! build prompts with [`prompts`] and settle remote results into these
//! types.

pub mod ordered;
pub mod prompts;

mod output;
mod probing;
mod question;
mod stage;

pub use output::{
    PipelineOutput, ProcessedQuestion, StageFailure, StageKind, StageReport, NO_VALID_RESPONSE,
};
pub use probing::{analyze, AnalysisMap, ProbingResult, ANALYSIS_PREFIX, PROBE_QUESTIONS};
pub use question::{AnswerOption, QuestionInput, MAX_OPTIONS};
pub use stage::PipelineStage;
