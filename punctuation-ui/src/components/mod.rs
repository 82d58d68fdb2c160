//! UI Components

pub mod chart;
pub mod loading;
pub mod results;
pub mod upload_form;

pub use chart::Chart;
pub use loading::InlineLoading;
pub use results::ResultsPanel;
pub use upload_form::UploadForm;
