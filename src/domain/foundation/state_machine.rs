//! State machine trait for lifecycle enums.
//!
//! Gives status enums a single place to declare which transitions are legal,
//! and a checked `transition_to` built on top of that declaration.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for PipelineStage {
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Idle => vec![Generating],
///             Generating => vec![Probing],
///             // ... etc
///         }
///     }
/// }
///
/// let next = PipelineStage::Idle.transition_to(PipelineStage::Generating)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
