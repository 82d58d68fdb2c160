//! Analysis Service HTTP Client
//!
//! Posts a file to the analysis service as multipart form data and decodes the
//! JSON it returns. One attempt per call: no retry, no timeout.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use super::backend::{AnalysisBackend, UploadFile, DEFAULT_ENDPOINT_URL, FILE_FIELD};
use super::error::{AnalysisError, AnalysisResult};
use super::response::AnalysisResponse;

/// Configuration for the analysis client
#[derive(Debug, Clone)]
pub struct AnalysisClientConfig {
    /// Full URL of the `process-file` endpoint
    pub endpoint_url: String,
}

impl Default for AnalysisClientConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
        }
    }
}

/// Analysis service REST client
pub struct AnalysisClient {
    client: Client,
    config: AnalysisClientConfig,
}

impl AnalysisClient {
    /// Create a new client with the given configuration
    pub fn new(config: AnalysisClientConfig) -> AnalysisResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("punctuation-analyzer/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    /// Upload a file and return the decoded response
    pub async fn process_file(&self, file: &UploadFile) -> AnalysisResult<AnalysisResponse> {
        let part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        let form = Form::new().part(FILE_FIELD, part);

        tracing::debug!(
            endpoint = %self.config.endpoint_url,
            file = %file.file_name,
            bytes = file.bytes.len(),
            "Uploading file for analysis"
        );

        let response = self
            .client
            .post(&self.config.endpoint_url)
            .multipart(form)
            .send()
            .await?;

        // Any non-2xx status is a failure, even when the body carries counts
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AnalysisError::ApiError {
                status: status.as_u16(),
                message: text,
            });
        }

        let text = response.text().await?;
        AnalysisResponse::from_json_str(&text)
    }
}

#[async_trait(?Send)]
impl AnalysisBackend<UploadFile> for AnalysisClient {
    fn endpoint(&self) -> &str {
        &self.config.endpoint_url
    }

    async fn analyze(&self, file: &UploadFile) -> AnalysisResult<AnalysisResponse> {
        self.process_file(file).await
    }
}
