//! Port for the external prescription-analysis service.

use async_trait::async_trait;

use crate::domain::AnalysisRequest;

/// Transport-facing failures reported by an [`AnalysisClient`] adapter.
///
/// The controller collapses every variant into one fixed user-facing
/// message; the variants exist so logs keep the underlying detail.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AnalysisClientError {
    /// The service answered with a non-success status code.
    #[error("analysis service returned status {status}")]
    Endpoint { status: u16 },

    /// The service could not be reached at the transport level.
    #[error("network error: {message}")]
    Network { message: String },

    /// The service answered, but not with the expected payload shape.
    #[error("malformed analysis response: {message}")]
    MalformedResponse { message: String },
}

/// Client for submitting prescriptions to the analysis service.
///
/// The controller issues exactly one call per accepted user action; there is
/// no retry on either side of this boundary.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Submits one request and returns the report markdown.
    async fn analyze(&self, request: AnalysisRequest) -> Result<String, AnalysisClientError>;
}
