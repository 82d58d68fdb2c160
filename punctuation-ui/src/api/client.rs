//! HTTP API Client
//!
//! Sends the selected file to the analysis service with the browser `fetch`
//! API.

use async_trait::async_trait;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use punctuation_analyzer::client::{
    AnalysisBackend, AnalysisError, AnalysisResponse, AnalysisResult, DEFAULT_ENDPOINT_URL,
    FILE_FIELD,
};

/// Local storage key for an endpoint override
const ENDPOINT_STORAGE_KEY: &str = "punctuation_endpoint_url";

/// Get the analysis endpoint from local storage or use the default
pub fn get_endpoint() -> String {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(ENDPOINT_STORAGE_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT_URL.to_string())
}

/// `fetch`-based analysis backend
pub struct FetchBackend {
    endpoint: String,
}

impl FetchBackend {
    pub fn new(endpoint: String) -> Self {
        Self { endpoint }
    }

    fn form_for(file: &File) -> AnalysisResult<FormData> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())
            .map_err(js_error)?;
        Ok(form)
    }
}

#[async_trait(?Send)]
impl AnalysisBackend<File> for FetchBackend {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn analyze(&self, file: &File) -> AnalysisResult<AnalysisResponse> {
        let form = Self::form_for(file)?;

        let response = Request::post(&self.endpoint)
            .body(form)
            .map_err(|e| AnalysisError::Transport(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(format!("Network error: {}", e)))?;

        // Any non-2xx status is a failure, even when the body carries counts
        if !response.ok() {
            return Err(AnalysisError::ApiError {
                status: response.status(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| AnalysisError::InvalidBody(e.to_string()))?;
        AnalysisResponse::from_json_str(&text)
    }
}

fn js_error(value: JsValue) -> AnalysisError {
    AnalysisError::Transport(format!("{:?}", value))
}
