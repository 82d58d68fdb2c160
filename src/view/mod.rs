//! Upload View
//!
//! The file select → upload → display cycle, independent of any particular
//! front end.
//!
//! - **State**: the `UploadState` machine (selected file, counts, loading flag)
//! - **Notice**: the two fixed user-facing error notices
//! - **View**: `UploadAnalyzeView`, which drives the state against a backend

mod notice;
mod state;
#[allow(clippy::module_inception)]
mod view;

pub use notice::{Notice, Notifier};
pub use state::{UploadStart, UploadState, TRIGGER_LABEL_IDLE, TRIGGER_LABEL_LOADING};
pub use view::{UploadAnalyzeView, UploadOutcome};
