use thiserror::Error;

/// Why a live map could not be produced
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Workflow service answered with status {0}")]
    StatusError(u16),

    #[error("Malformed map payload: {0}")]
    DecodeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;
