use thiserror::Error;

/// Failure taxonomy for the roster feed. The display text is user-facing:
/// the error renderer puts it verbatim inside the error fragment.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Missing url!")]
    MissingUrl,
    #[error("{0}")]
    Status(String),
    #[error("invalid roster body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}
