//! Domain layer containing the assessment vocabulary.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (validation errors, state machine contract)
//! - `assessment` - Question input, probe battery, prompts and pipeline output

pub mod assessment;
pub mod foundation;
