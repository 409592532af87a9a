//! Assessment command and query handlers, and the three pipeline stages.

mod generate_response;
mod get_latest_assessment;
mod pipeline;
mod process_question;
mod remote_call;
mod run_probes;
mod synthesize_assessment;

pub use generate_response::ResponseGenerator;
pub use get_latest_assessment::GetLatestAssessmentHandler;
pub use pipeline::{AssessmentPipeline, PipelineRun};
pub use process_question::{ProcessQuestionCommand, ProcessQuestionError, ProcessQuestionHandler};
pub use run_probes::ProbeRunner;
pub use synthesize_assessment::AssessmentSynthesizer;
