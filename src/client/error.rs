//! Analysis client error types

use thiserror::Error;

/// Errors that can occur when talking to the analysis service
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The request never produced a response (DNS, connect, TLS, reset...)
    #[error("Request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// The response body was not the JSON we expected
    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    /// Reading the file to upload failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::InvalidBody(err.to_string())
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AnalysisError::InvalidBody(err.to_string())
        } else {
            AnalysisError::Transport(err.to_string())
        }
    }
}

/// Result type alias for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;
