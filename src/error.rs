// Crate error taxonomy
//
// Deterministic pipeline stages never fail; every variant here originates
// either from backend selection/configuration or from the Gemini round-trip.
// Errors propagate to the orchestrator's caller unchanged — no retry, no
// fallback to the rules backend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    /// Agent mode selected but the backend is not credentialed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The upstream model call exceeded the configured timeout.
    #[error("upstream request timed out after {seconds}s")]
    UpstreamTimeout { seconds: u64 },

    /// The upstream model returned a response with no usable text.
    #[error("upstream returned an empty response ({0})")]
    UpstreamEmptyResponse(&'static str),

    /// Transport or HTTP-status failure from the upstream model call.
    #[error("upstream request failed: {0}")]
    Upstream(String),

    /// Caller-side goal-text validation failures.
    #[error("invalid goals text: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Mode string not recognized by the backend factory.
    #[error("unsupported mode: {0}")]
    UnsupportedMode(String),
}
