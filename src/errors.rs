use thiserror::Error;

/// Error type for projection contract violations and payload decoding.
///
/// Data-quality problems (unparseable dates, incomplete recurring
/// definitions) never appear here; those records are skipped with a
/// warning so one corrupt transaction cannot sink the whole projection.
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("invalid projection horizon: {0} days (must be at least 1)")]
    InvalidHorizon(i64),
    #[error("payload decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
