//! API Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// No response: network failure, CORS, aborted fetch
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered `success: false`
    #[error("{0}")]
    Rejected(String),

    /// Non-2xx binary response without an explanatory body
    #[error("HTTP {0}")]
    Status(u16),

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
