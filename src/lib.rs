//! # Punctuation Analyzer
//!
//! Upload a CSV file to the remote punctuation analysis service and present the
//! punctuation-mark counts it returns as a list and a bar chart.
//!
//! No text analysis happens here. The crate owns the client side of the
//! exchange: the upload state machine, normalization of the service's partial
//! answer into all 18 categories, and the chart configuration derived from it.
//!
//! ## Modules
//!
//! - [`analysis`]: categories, counts, normalization and chart configuration
//! - [`client`]: the analysis service contract and its `reqwest` client
//! - [`view`]: the upload view state machine and user-facing notices
//! - [`config`]: TOML configuration with environment overrides (native only)
//! - [`render`]: table, chart, JSON and CSV output (native only)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use punctuation_analyzer::client::{AnalysisClient, AnalysisClientConfig, UploadFile};
//! use punctuation_analyzer::view::{Notice, Notifier, UploadAnalyzeView, UploadOutcome};
//!
//! struct Stderr;
//!
//! impl Notifier for Stderr {
//!     fn notify(&self, notice: Notice) {
//!         eprintln!("{notice}");
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AnalysisClient::new(AnalysisClientConfig::default())?;
//!     let mut view = UploadAnalyzeView::new(client, Stderr);
//!
//!     view.select_file(UploadFile::from_path("essay.csv".as_ref())?);
//!     if let UploadOutcome::Analyzed(counts) = view.upload_and_analyze().await {
//!         println!("{} punctuation marks", counts.total());
//!         println!("axis max: {}", view.chart_config().y_axis_max);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod client;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod render;
pub mod view;

// Re-export top-level types for convenience
pub use analysis::{
    axis_bound, derive_chart_config, normalize, Category, ChartConfig, Palette, PunctuationCounts,
};

pub use client::{
    AnalysisBackend, AnalysisError, AnalysisResponse, AnalysisResult, UploadFile,
    DEFAULT_ENDPOINT_URL,
};

#[cfg(feature = "native")]
pub use client::{AnalysisClient, AnalysisClientConfig};

pub use view::{Notice, Notifier, UploadAnalyzeView, UploadOutcome, UploadStart, UploadState};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig, OutputConfig, OutputFormat};
