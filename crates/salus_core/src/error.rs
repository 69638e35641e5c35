//! Error taxonomy for the suggestion pipeline.
//!
//! Remote and parse failures are recoverable — the orchestrator falls back to
//! the rule engine and only surfaces them as an informational notice. The empty
//! mood case is a validation failure reported to the caller as-is. Storage
//! corruption never reaches this enum; the store resets to an empty history.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SuggestError {
    /// Mood input was empty after trimming. No suggestion is produced.
    #[error("mood input is empty")]
    EmptyMood,

    /// Network or HTTP failure calling the generative API.
    #[error("generative API call failed: {0}")]
    RemoteCall(String),

    /// The model's response was not the expected JSON object, or a required
    /// field was missing or empty.
    #[error("generative response could not be parsed: {0}")]
    ResponseParse(String),
}

impl SuggestError {
    /// Whether the orchestrator may recover by falling back to the rule engine.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::RemoteCall(_) | Self::ResponseParse(_))
    }
}
