//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `ai` - OpenAI-compatible completion client and a scriptable mock
//! - `http` - axum REST API
//! - `storage` - in-memory most-recent-result slot

pub mod ai;
pub mod http;
pub mod storage;
