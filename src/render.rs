//! Terminal output
//!
//! Renders an analysis result as a label/value table with an optional text bar
//! chart, as a JSON report, or as CSV.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;

use crate::analysis::{Category, ChartConfig, PunctuationCounts};

pub const RESULTS_HEADING: &str = "Punctuation Count Results";
pub const DISTRIBUTION_HEADING: &str = "Punctuation Distribution";

/// Width of the longest bar in the terminal chart, in cells
const BAR_WIDTH: u64 = 40;

/// Errors that can occur while rendering output
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Output was not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A finished analysis, as written by `--format json`
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub file: String,
    pub analyzed_at: DateTime<Utc>,
    pub punctuation_counts: PunctuationCounts,
    pub total: u64,
    pub axis_max: u64,
}

impl AnalysisReport {
    pub fn new(file: impl Into<String>, counts: PunctuationCounts, chart: &ChartConfig) -> Self {
        Self {
            file: file.into(),
            analyzed_at: Utc::now(),
            punctuation_counts: counts,
            total: counts.total(),
            axis_max: chart.y_axis_max,
        }
    }
}

/// One row per category, in category order
pub fn render_table(counts: &PunctuationCounts) -> String {
    let width = Category::ALL
        .iter()
        .map(|c| c.label().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{RESULTS_HEADING}");
    let _ = writeln!(out, "{}", "-".repeat(RESULTS_HEADING.len()));
    for (category, count) in counts.iter() {
        let _ = writeln!(out, "{:<width$}  {:>8}", capitalize(&category.label()), count);
    }
    out
}

/// Horizontal bar chart scaled to the chart's axis bound
pub fn render_chart(chart: &ChartConfig) -> String {
    let mut out = String::new();
    let Some(dataset) = chart.datasets.first() else {
        return out;
    };

    let width = chart.labels.iter().map(|l| l.len()).max().unwrap_or(0);

    let _ = writeln!(out, "{DISTRIBUTION_HEADING}");
    let _ = writeln!(out, "{} ({} by {})", chart.title, chart.y_axis_title, chart.x_axis_title);
    for (label, value) in chart.labels.iter().zip(&dataset.data) {
        let cells = if chart.y_axis_max == 0 {
            0
        } else {
            (u128::from(*value) * u128::from(BAR_WIDTH)).div_ceil(u128::from(chart.y_axis_max)) as u64
        };
        let _ = writeln!(
            out,
            "{:<width$} |{:<bar$}| {}",
            label,
            "#".repeat(cells as usize),
            value,
            bar = BAR_WIDTH as usize
        );
    }
    let _ = writeln!(
        out,
        "{:<width$}  0{:>bar$}",
        "",
        chart.y_axis_max,
        bar = BAR_WIDTH as usize
    );
    out
}

/// `category,label,count` rows with a header
pub fn render_csv(counts: &PunctuationCounts) -> Result<String, RenderError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["category", "label", "count"])?;
    for (category, count) in counts.iter() {
        writer.write_record([
            category.key(),
            category.label().as_str(),
            count.to_string().as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| RenderError::Csv(csv::Error::from(e.into_error())))?;
    Ok(String::from_utf8(bytes)?)
}

/// Pretty-printed JSON report
pub fn render_json(report: &AnalysisReport) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn capitalize(label: &str) -> String {
    label
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
