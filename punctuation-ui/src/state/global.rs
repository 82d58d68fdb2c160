//! Global Application State
//!
//! Reactive state management using Leptos signals. The upload state machine
//! itself lives in the core crate; this wraps it in a signal and runs the
//! request.

use leptos::*;
use web_sys::File;

use punctuation_analyzer::analysis::{derive_chart_config, ChartConfig, Palette};
use punctuation_analyzer::client::AnalysisBackend;
use punctuation_analyzer::view::{Notice, UploadStart, UploadState};

use crate::api::{self, FetchBackend};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Selected file, last result and loading flag
    pub upload: RwSignal<UploadState<File>>,
    /// Bar colors
    pub palette: StoredValue<Palette>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        upload: create_rw_signal(UploadState::new()),
        palette: store_value(Palette::default()),
    };

    provide_context(state);
}

impl GlobalState {
    pub fn is_loading(&self) -> bool {
        self.upload.with(|s| s.is_loading())
    }

    pub fn trigger_enabled(&self) -> bool {
        self.upload.with(|s| s.trigger_enabled())
    }

    pub fn select_file(&self, file: File) {
        self.upload.update(|s| s.select_file(file));
    }

    /// Chart for the current results
    pub fn chart_config(&self) -> ChartConfig {
        let palette = self.palette.get_value();
        self.upload
            .with(|s| derive_chart_config(s.counts(), &palette))
    }

    /// Upload the selected file and store the result.
    ///
    /// A click while a request is in flight is ignored; the button is also
    /// disabled, but a fast double click can land before the re-render.
    pub fn upload_and_analyze(&self) {
        let file = match self.upload.try_update(|s| s.begin_upload()) {
            Some(UploadStart::Ready(file)) => file,
            Some(UploadStart::Rejected(notice)) => {
                show_notice(notice);
                return;
            }
            Some(UploadStart::InFlight) | None => return,
        };

        let upload = self.upload;
        spawn_local(async move {
            let backend = FetchBackend::new(api::get_endpoint());
            let result = backend.analyze(&file).await;

            match upload.try_update(|s| s.finish_upload(result)) {
                Some(Ok(counts)) => {
                    logging::log!("{}", serde_json::to_string(&counts).unwrap_or_default());
                }
                Some(Err(notice)) => {
                    logging::warn!("Upload to {} failed", backend.endpoint());
                    show_notice(notice);
                }
                None => {}
            }
        });
    }
}

/// Show a blocking notice with `window.alert`
pub fn show_notice(notice: Notice) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(notice.message());
    }
}
