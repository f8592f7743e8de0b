// Evaluation error taxonomy

use thiserror::Error;

/// Errors surfaced by the evaluation pipeline.
///
/// `Unauthorized` and `InvalidRequest` are raised before any upstream call
/// is issued. The remaining variants occur during a batch and collapse the
/// whole operation to a single failure; partial results are never returned.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("invalid password")]
    Unauthorized,

    #[error("invalid request: {0}")]
    InvalidRequest(&'static str),

    #[error("unknown dragon: {0}")]
    UnknownDragon(String),

    #[error("could not extract feedback JSON from {dragon_id}'s response")]
    ExtractionFailure {
        dragon_id: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Network or API failure from the hosted model.
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}
