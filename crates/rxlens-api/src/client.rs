//! Analysis service client over the transport seam.

use async_trait::async_trait;
use serde::Deserialize;

use rxlens_core::{AnalysisClient, AnalysisClientError, AnalysisRequest};

use crate::config::AnalysisServiceConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::{FormPart, HttpBackend, ReqwestBackend};

/// Multipart field carrying the prescription image.
const FIELD_FILE: &str = "file";
/// Multipart field carrying the allergy/history note.
const FIELD_DETAILS: &str = "details";
/// Multipart field carrying the report language name.
const FIELD_LANGUAGE: &str = "language";

/// Analysis client backed by the production HTTP transport.
pub type DefaultAnalysisClient = AnalysisHttpClient<ReqwestBackend>;

/// Expected success payload. Extra fields are ignored.
#[derive(Debug, Deserialize)]
struct AnalysisResponse {
    analysis: String,
}

/// Client for `POST {base}/analyze`, generic over the transport for tests.
pub struct AnalysisHttpClient<B: HttpBackend> {
    backend: B,
    config: AnalysisServiceConfig,
}

impl DefaultAnalysisClient {
    pub fn new(config: &AnalysisServiceConfig) -> Self {
        Self {
            backend: ReqwestBackend::new(config),
            config: config.clone(),
        }
    }
}

impl<B: HttpBackend> AnalysisHttpClient<B> {
    #[cfg(test)]
    pub const fn with_backend(config: AnalysisServiceConfig, backend: B) -> Self {
        Self { backend, config }
    }

    fn endpoint(&self) -> String {
        format!("{}/analyze", self.config.base_url.trim_end_matches('/'))
    }

    fn build_form(request: &AnalysisRequest) -> Vec<FormPart> {
        vec![
            FormPart::File {
                name: FIELD_FILE,
                file_name: request.file.file_name.clone(),
                mime_type: request.file.mime_type.clone(),
                bytes: request.file.bytes.clone(),
            },
            FormPart::Text {
                name: FIELD_DETAILS,
                value: request.details.clone(),
            },
            FormPart::Text {
                name: FIELD_LANGUAGE,
                value: request.language.to_string(),
            },
        ]
    }

    /// Submits one request and extracts the report markdown.
    pub async fn request_analysis(&self, request: &AnalysisRequest) -> ApiResult<String> {
        let url = self.endpoint();
        let response = self
            .backend
            .post_multipart(&url, Self::build_form(request))
            .await?;

        tracing::debug!(status = response.status, "Analysis service answered");
        if !(200..300).contains(&response.status) {
            return Err(ApiError::RequestFailed {
                status: response.status,
                url,
            });
        }

        let payload: AnalysisResponse = serde_json::from_str(&response.body)?;
        Ok(payload.analysis)
    }
}

#[async_trait]
impl<B: HttpBackend> AnalysisClient for AnalysisHttpClient<B> {
    async fn analyze(&self, request: AnalysisRequest) -> Result<String, AnalysisClientError> {
        self.request_analysis(&request).await.map_err(Into::into)
    }
}
