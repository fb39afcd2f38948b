use thiserror::Error;

/// everything that can go wrong while building or saving a figure
#[derive(Debug, Error)]
pub enum Error {
    /// a trigonometric precondition was violated
    #[error("domain violation: {0}")]
    Domain(&'static str),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
