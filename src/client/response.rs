//! Analysis service response

use serde_json::Value;

use super::error::AnalysisResult;
use crate::analysis::{normalize, PunctuationCounts};

/// Decoded `/process-file` response body
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResponse {
    body: Value,
}

impl AnalysisResponse {
    /// Wrap an already-parsed JSON body
    pub fn from_value(body: Value) -> Self {
        Self { body }
    }

    /// Parse a response body. Fails only when the body is not JSON at all.
    pub fn from_json_str(text: &str) -> AnalysisResult<Self> {
        let body: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(body))
    }

    /// Normalized counts.
    ///
    /// A body without a `punctuation_counts` object reads as all zeros rather
    /// than failing.
    pub fn counts(&self) -> PunctuationCounts {
        match self.body.get("punctuation_counts") {
            Some(Value::Object(raw)) => normalize(raw),
            Some(other) => {
                tracing::warn!(value = %other, "punctuation_counts is not an object");
                PunctuationCounts::zeroed()
            }
            None => {
                tracing::warn!("Response has no punctuation_counts field");
                PunctuationCounts::zeroed()
            }
        }
    }
}
