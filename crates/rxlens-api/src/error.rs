//! Error types for the analysis service client.

use rxlens_core::AnalysisClientError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the HTTP adapter.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The service answered with a non-success status.
    #[error("analysis request failed with status {status}: {url}")]
    RequestFailed { status: u16, url: String },

    /// Transport-level failure from the HTTP stack.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The body was not the expected JSON payload.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl From<ApiError> for AnalysisClientError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::RequestFailed { status, .. } => Self::Endpoint { status },
            ApiError::Network(source) => Self::Network {
                message: source.to_string(),
            },
            ApiError::JsonParse(source) => Self::MalformedResponse {
                message: source.to_string(),
            },
        }
    }
}
