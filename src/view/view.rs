//! Upload-and-analyze view
//!
//! Drives [`UploadState`] against an [`AnalysisBackend`] and raises notices on a
//! [`Notifier`].

use crate::analysis::{derive_chart_config, ChartConfig, Palette, PunctuationCounts};
use crate::client::AnalysisBackend;

use super::notice::{Notice, Notifier};
use super::state::{UploadStart, UploadState};

/// Result of one `upload_and_analyze` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Counts were received and stored
    Analyzed(PunctuationCounts),
    /// A notice was raised; see [`Notice`]
    Notified(Notice),
    /// A request was already in flight, so nothing happened
    Ignored,
}

/// The upload view: file selection, upload, results and chart
pub struct UploadAnalyzeView<F, B, N> {
    backend: B,
    notifier: N,
    palette: Palette,
    state: UploadState<F>,
}

impl<F, B, N> UploadAnalyzeView<F, B, N>
where
    F: Clone,
    B: AnalysisBackend<F>,
    N: Notifier,
{
    pub fn new(backend: B, notifier: N) -> Self {
        Self::with_palette(backend, notifier, Palette::default())
    }

    pub fn with_palette(backend: B, notifier: N, palette: Palette) -> Self {
        Self {
            backend,
            notifier,
            palette,
            state: UploadState::default(),
        }
    }

    /// Current view state
    pub fn state(&self) -> &UploadState<F> {
        &self.state
    }

    /// Replace the selected file
    pub fn select_file(&mut self, file: F) {
        self.state.select_file(file);
    }

    /// Upload the selected file and store the normalized counts.
    ///
    /// Raises [`Notice::NoFileSelected`] without a request when nothing is
    /// selected, and [`Notice::UploadOrAnalysisFailed`] on any failure. The
    /// loading flag is cleared before returning in every case.
    pub async fn upload_and_analyze(&mut self) -> UploadOutcome {
        let file = match self.state.begin_upload() {
            UploadStart::Ready(file) => file,
            UploadStart::Rejected(notice) => {
                self.notifier.notify(notice);
                return UploadOutcome::Notified(notice);
            }
            UploadStart::InFlight => {
                tracing::debug!("Upload already in flight, ignoring trigger");
                return UploadOutcome::Ignored;
            }
        };

        tracing::info!(endpoint = %self.backend.endpoint(), "Analyzing file");
        let result = self.backend.analyze(&file).await;

        match self.state.finish_upload(result) {
            Ok(counts) => {
                tracing::debug!(
                    counts = %serde_json::to_string(&counts).unwrap_or_default(),
                    "Normalized punctuation counts"
                );
                UploadOutcome::Analyzed(counts)
            }
            Err(notice) => {
                self.notifier.notify(notice);
                UploadOutcome::Notified(notice)
            }
        }
    }

    /// Chart for the current results (empty when there are none)
    pub fn chart_config(&self) -> ChartConfig {
        derive_chart_config(self.state.counts(), &self.palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Category;
    use crate::client::{AnalysisError, AnalysisResponse, AnalysisResult, UploadFile};
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    /// Backend stub returning canned bodies in order
    struct StubBackend {
        replies: RefCell<Vec<AnalysisResult<AnalysisResponse>>>,
        calls: Cell<usize>,
    }

    impl StubBackend {
        fn new(replies: Vec<AnalysisResult<AnalysisResponse>>) -> Self {
            Self {
                replies: RefCell::new(replies),
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl AnalysisBackend<UploadFile> for StubBackend {
        fn endpoint(&self) -> &str {
            "stub://process-file"
        }

        async fn analyze(&self, _file: &UploadFile) -> AnalysisResult<AnalysisResponse> {
            self.calls.set(self.calls.get() + 1);
            self.replies.borrow_mut().remove(0)
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: RefCell<Vec<Notice>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }
    }

    fn body(json: &str) -> AnalysisResult<AnalysisResponse> {
        AnalysisResponse::from_json_str(json)
    }

    fn essay() -> UploadFile {
        UploadFile::new("essay.csv", "text\nHello, world.\n")
    }

    #[tokio::test]
    async fn test_no_file_selected_issues_no_request() {
        let backend = StubBackend::new(vec![]);
        let notifier = RecordingNotifier::default();
        let mut view: UploadAnalyzeView<UploadFile, _, _> =
            UploadAnalyzeView::new(&backend, &notifier);

        let outcome = view.upload_and_analyze().await;

        assert_eq!(outcome, UploadOutcome::Notified(Notice::NoFileSelected));
        assert_eq!(backend.calls.get(), 0);
        assert_eq!(*notifier.notices.borrow(), vec![Notice::NoFileSelected]);
        assert!(!view.state().is_loading());
    }

    #[tokio::test]
    async fn test_end_to_end_success() {
        let backend = StubBackend::new(vec![body(
            r#"{"punctuation_counts": {"commas": 42, "full_stops": 10}}"#,
        )]);
        let notifier = RecordingNotifier::default();
        let mut view = UploadAnalyzeView::new(&backend, &notifier);

        view.select_file(essay());
        let outcome = view.upload_and_analyze().await;

        let counts = match outcome {
            UploadOutcome::Analyzed(counts) => counts,
            other => panic!("unexpected outcome: {other:?}"),
        };
        assert_eq!(counts.get(Category::Commas), 42);
        assert_eq!(counts.get(Category::FullStops), 10);
        assert_eq!(counts.iter().filter(|(_, n)| *n == 0).count(), 16);

        let chart = view.chart_config();
        assert_eq!(chart.datasets[0].data.len(), 18);
        assert_eq!(chart.y_axis_max, 1000);
        assert!(notifier.notices.borrow().is_empty());
        assert!(!view.state().is_loading());
    }

    #[tokio::test]
    async fn test_network_failure_keeps_previous_counts() {
        let backend = StubBackend::new(vec![Err(AnalysisError::Transport(
            "connection refused".to_string(),
        ))]);
        let notifier = RecordingNotifier::default();
        let mut view = UploadAnalyzeView::new(&backend, &notifier);

        view.select_file(essay());
        let outcome = view.upload_and_analyze().await;

        assert_eq!(outcome, UploadOutcome::Notified(Notice::UploadOrAnalysisFailed));
        assert_eq!(*notifier.notices.borrow(), vec![Notice::UploadOrAnalysisFailed]);
        assert!(view.state().counts().is_none());
        assert!(!view.state().is_loading());
        assert!(view.chart_config().is_empty());
    }

    #[tokio::test]
    async fn test_failure_after_success_leaves_stale_result() {
        let backend = StubBackend::new(vec![
            body(r#"{"punctuation_counts": {"hyphens": 1200}}"#),
            body("not json at all"),
        ]);
        let notifier = RecordingNotifier::default();
        let mut view = UploadAnalyzeView::new(&backend, &notifier);

        view.select_file(essay());
        view.upload_and_analyze().await;
        assert_eq!(view.chart_config().y_axis_max, 2000);

        let outcome = view.upload_and_analyze().await;
        assert_eq!(outcome, UploadOutcome::Notified(Notice::UploadOrAnalysisFailed));
        assert_eq!(view.state().counts().unwrap().get(Category::Hyphens), 1200);
        assert_eq!(backend.calls.get(), 2);
    }

    #[tokio::test]
    async fn test_chart_uses_configured_palette() {
        let mut colors: Vec<String> = crate::analysis::DEFAULT_PALETTE
            .iter()
            .map(|c| c.to_string())
            .collect();
        colors[0] = "#000000".to_string();
        let palette = Palette::new(colors).unwrap();

        let backend = StubBackend::new(vec![body(r#"{"punctuation_counts": {}}"#)]);
        let notifier = RecordingNotifier::default();
        let mut view = UploadAnalyzeView::with_palette(&backend, &notifier, palette);

        view.select_file(essay());
        view.upload_and_analyze().await;

        let chart = view.chart_config();
        assert_eq!(chart.datasets[0].background_colors[0], "#000000");
        assert_eq!(chart.y_axis_max, 0);
    }
}
