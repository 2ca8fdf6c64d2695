use crate::models::NarrativeRequest;

/// Interface for the external service that turns a solved market into a
/// natural-language explanation.
///
/// The explorer treats narration as a fire-and-forget side effect: the
/// request carries everything the service needs, and a failure is expected
/// to be replaced by [`crate::models::FALLBACK_NARRATIVE`] at the boundary,
/// never surfaced as a computation error.
pub trait Narrator {
    /// Error type for narration failures
    type Error: std::error::Error;

    /// Produce free text explaining the equilibria described by the request.
    fn explain(
        &self,
        request: &NarrativeRequest,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
