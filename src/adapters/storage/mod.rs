//! Storage adapters for the most-recent-result slot.

mod in_memory_assessment_store;

pub use in_memory_assessment_store::InMemoryAssessmentStore;
