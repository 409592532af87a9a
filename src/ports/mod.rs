//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Hosted completion service
//! - `AssessmentStore` - Most-recent-result slot

mod ai_provider;
mod assessment_store;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, SamplingParams, TokenUsage,
};
pub use assessment_store::{AssessmentStore, AssessmentStoreError};
