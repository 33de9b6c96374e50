//! Transport seam used by the analysis client.

use async_trait::async_trait;

use crate::config::AnalysisServiceConfig;
use crate::error::ApiResult;

/// One part of a multipart form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text {
        name: &'static str,
        value: String,
    },
    File {
        name: &'static str,
        file_name: String,
        mime_type: String,
        bytes: Vec<u8>,
    },
}

/// Raw response produced by a backend.
#[derive(Debug, Clone)]
pub struct BackendResponse {
    pub status: u16,
    pub body: String,
}

/// Minimal HTTP surface the client needs; real transport or test fake.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn post_multipart(&self, url: &str, parts: Vec<FormPart>) -> ApiResult<BackendResponse>;
}

/// Production backend over a shared `reqwest` client.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(config: &AnalysisServiceConfig) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .expect("failed to create HTTP client");
        Self { client }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_multipart(&self, url: &str, parts: Vec<FormPart>) -> ApiResult<BackendResponse> {
        let mut form = reqwest::multipart::Form::new();
        for part in parts {
            form = match part {
                FormPart::Text { name, value } => form.text(name, value),
                FormPart::File {
                    name,
                    file_name,
                    mime_type,
                    bytes,
                } => {
                    let file = reqwest::multipart::Part::bytes(bytes)
                        .file_name(file_name)
                        .mime_str(&mime_type)?;
                    form.part(name, file)
                }
            };
        }

        tracing::debug!(%url, "POST multipart to analysis service");
        let response = self.client.post(url).multipart(form).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(BackendResponse { status, body })
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeBackend;
    use super::*;

    #[tokio::test]
    async fn fake_backend_records_requests_in_order() {
        let backend = FakeBackend::with_reply(200, "{}");
        let log = backend.log();

        backend
            .post_multipart(
                "http://one",
                vec![FormPart::Text {
                    name: "a",
                    value: "1".to_owned(),
                }],
            )
            .await
            .unwrap();
        backend.post_multipart("http://two", Vec::new()).await.unwrap();

        let log = log.lock().unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].url, "http://one");
        assert_eq!(log[1].url, "http://two");
    }
}
