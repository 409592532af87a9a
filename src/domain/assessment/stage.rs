//! Pipeline lifecycle.

use std::fmt;

use serde::Serialize;

use crate::domain::foundation::StateMachine;

/// Where a pipeline run is. Strictly forward; a failed remote call never
/// leaves the happy path, it only degrades that stage's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Idle,
    Generating,
    Probing,
    Synthesizing,
    Done,
}

impl PipelineStage {
    /// The single stage that follows this one, if any.
    pub fn next(&self) -> Option<Self> {
        self.valid_transitions().into_iter().next()
    }
}

impl StateMachine for PipelineStage {
    fn valid_transitions(&self) -> Vec<Self> {
        use PipelineStage::*;
        match self {
            Idle => vec![Generating],
            Generating => vec![Probing],
            Probing => vec![Synthesizing],
            Synthesizing => vec![Done],
            Done => vec![],
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PipelineStage::Idle => "idle",
            PipelineStage::Generating => "generating",
            PipelineStage::Probing => "probing",
            PipelineStage::Synthesizing => "synthesizing",
            PipelineStage::Done => "done",
        };
        write!(f, "{}", s)
    }
}
