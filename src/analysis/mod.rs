//! Punctuation Analysis Model
//!
//! The data the front ends work with once a response comes back:
//!
//! - **Category**: the 18 fixed punctuation categories, in display order
//! - **Counts**: a total count mapping and the normalization that builds it
//! - **Chart**: bar-chart configuration and axis scaling

mod category;
mod chart;
mod counts;

pub use category::{Category, UnknownCategory, CATEGORY_COUNT};
pub use chart::{
    axis_bound, derive_chart_config, BarDataset, ChartConfig, LegendPosition, Palette,
    PaletteError, AXIS_STEP, CHART_TITLE, DATASET_LABEL, DEFAULT_PALETTE, X_AXIS_TITLE,
    Y_AXIS_TITLE,
};
pub use counts::{normalize, PunctuationCounts};
