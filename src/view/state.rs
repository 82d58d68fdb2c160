//! Upload view state machine
//!
//! `UploadState` holds the selected file, the last good result and the loading
//! flag. It does no I/O: a front end calls [`UploadState::begin_upload`], runs
//! the request however it likes, and hands the outcome to
//! [`UploadState::finish_upload`].

use crate::analysis::PunctuationCounts;
use crate::client::{AnalysisResponse, AnalysisResult};

use super::notice::Notice;

pub const TRIGGER_LABEL_IDLE: &str = "Upload and Analyze";
pub const TRIGGER_LABEL_LOADING: &str = "Analyzing...";

/// Transient state of the upload view. `F` is the front end's file handle.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadState<F> {
    selected_file: Option<F>,
    counts: Option<PunctuationCounts>,
    is_loading: bool,
}

/// What `begin_upload` decided
#[derive(Debug, Clone, PartialEq)]
pub enum UploadStart<F> {
    /// Loading flag is set; send this file
    Ready(F),
    /// Nothing to send; show the notice
    Rejected(Notice),
    /// A request is already in flight; do nothing
    InFlight,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            selected_file: None,
            counts: None,
            is_loading: false,
        }
    }
}

impl<F: Clone> UploadState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selected file. Results and loading flag are untouched.
    pub fn select_file(&mut self, file: F) {
        self.selected_file = Some(file);
    }

    /// Start an upload: checks the preconditions and raises the loading flag.
    pub fn begin_upload(&mut self) -> UploadStart<F> {
        if self.is_loading {
            return UploadStart::InFlight;
        }

        match &self.selected_file {
            Some(file) => {
                self.is_loading = true;
                UploadStart::Ready(file.clone())
            }
            None => UploadStart::Rejected(Notice::NoFileSelected),
        }
    }

    /// Apply the outcome of a request started with `begin_upload`.
    ///
    /// On success the counts are normalized and stored. On failure the
    /// previous counts are kept. The loading flag is cleared either way.
    pub fn finish_upload(
        &mut self,
        result: AnalysisResult<AnalysisResponse>,
    ) -> Result<PunctuationCounts, Notice> {
        let outcome = match result {
            Ok(response) => {
                let counts = response.counts();
                self.counts = Some(counts);
                Ok(counts)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Upload failed");
                Err(Notice::UploadOrAnalysisFailed)
            }
        };

        self.is_loading = false;
        outcome
    }
}

impl<F> UploadState<F> {
    pub fn selected_file(&self) -> Option<&F> {
        self.selected_file.as_ref()
    }

    /// Last successful result, if any
    pub fn counts(&self) -> Option<&PunctuationCounts> {
        self.counts.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether the upload trigger accepts clicks
    pub fn trigger_enabled(&self) -> bool {
        !self.is_loading
    }

    pub fn trigger_label(&self) -> &'static str {
        if self.is_loading {
            TRIGGER_LABEL_LOADING
        } else {
            TRIGGER_LABEL_IDLE
        }
    }
}
