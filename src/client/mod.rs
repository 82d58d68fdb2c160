//! Analysis Service Client
//!
//! Everything needed to send a file to the remote analysis service and read
//! back its answer.
//!
//! - **Backend**: the [`AnalysisBackend`] seam and the in-memory [`UploadFile`]
//! - **Response**: decoding of the `punctuation_counts` body
//! - **Client**: the `reqwest` implementation (native builds only)

mod backend;
#[cfg(feature = "native")]
#[allow(clippy::module_inception)]
mod client;
mod error;
mod response;

pub use backend::{AnalysisBackend, UploadFile, DEFAULT_ENDPOINT_URL, FILE_FIELD};
#[cfg(feature = "native")]
pub use client::{AnalysisClient, AnalysisClientConfig};
pub use error::{AnalysisError, AnalysisResult};
pub use response::AnalysisResponse;
