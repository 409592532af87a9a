//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary and the state machine contract used by
//! the assessment domain.

mod errors;
mod state_machine;

pub use errors::ValidationError;
pub use state_machine::StateMachine;
