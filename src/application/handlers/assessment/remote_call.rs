//! Shared plumbing for the three stages: one completion, settled to text.

use tracing::error;

use crate::domain::assessment::{StageFailure, StageKind, NO_VALID_RESPONSE};
use crate::ports::{AIError, AIProvider, CompletionRequest};

/// Issue one completion and keep only its text.
pub(super) async fn complete_text(
    provider: &dyn AIProvider,
    request: CompletionRequest,
) -> Result<String, AIError> {
    provider.complete(request).await.map(|response| response.content)
}

/// Project a call's outcome onto stage output.
///
/// A failure is logged, recorded in `failures`, and replaced by
/// [`NO_VALID_RESPONSE`]. Successful text passes through untouched.
pub(super) fn settle(
    outcome: Result<String, AIError>,
    stage: StageKind,
    probe: Option<&str>,
    failures: &mut Vec<StageFailure>,
) -> String {
    match outcome {
        Ok(text) => text,
        Err(err) => {
            error!(
                stage = %stage,
                probe = probe.unwrap_or_default(),
                code = err.code(),
                error = %err,
                "Remote call failed, substituting fallback text"
            );
            failures.push(StageFailure::new(stage, probe, err.code(), err.to_string()));
            NO_VALID_RESPONSE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_passes_text_through_verbatim() {
        let mut failures = Vec::new();
        let text = settle(
            Ok("  A: Measles\n".to_string()),
            StageKind::Generate,
            None,
            &mut failures,
        );
        assert_eq!(text, "  A: Measles\n");
        assert!(failures.is_empty());
    }

    #[test]
    fn failure_becomes_sentinel_and_record() {
        let mut failures = Vec::new();
        let text = settle(
            Err(AIError::AuthenticationFailed),
            StageKind::Probe,
            Some("Why?"),
            &mut failures,
        );
        assert_eq!(text, NO_VALID_RESPONSE);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].stage, StageKind::Probe);
        assert_eq!(failures[0].probe.as_deref(), Some("Why?"));
        assert_eq!(failures[0].code, "authentication_failed");
    }
}
