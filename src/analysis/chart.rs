//! Chart configuration
//!
//! Derives the bar-chart description (labels, series, colors, axis bound) from a
//! set of counts. Drawing is left to the front end.

use serde::{Deserialize, Serialize};

use super::category::{Category, CATEGORY_COUNT};
use super::counts::PunctuationCounts;

/// Default bar colors, one per category in category order
pub const DEFAULT_PALETTE: [&str; CATEGORY_COUNT] = [
    "#FF6F61", "#6B5B95", "#88B04B", "#F7CAC9", "#92A8D1", "#034F84", "#F7786B", "#DE93BA",
    "#A1C8E9", "#D94F70", "#45B8AC", "#EFC050", "#5B5EA6", "#9B2335", "#E15D44", "#7FCDCD",
    "#BC243C", "#4A4E4D",
];

pub const CHART_TITLE: &str = "Punctuation Analysis";
pub const DATASET_LABEL: &str = "Punctuation Count";
pub const X_AXIS_TITLE: &str = "Punctuation Type";
pub const Y_AXIS_TITLE: &str = "Count";

/// The y axis is rounded up to a multiple of this
pub const AXIS_STEP: u64 = 1000;

/// Bar colors, mapped positionally onto [`Category::ALL`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette(Vec<String>);

/// Palette validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error("Palette must have exactly {expected} colors, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("Invalid palette color {0:?}: expected #RRGGBB")]
    InvalidColor(String),
}

impl Palette {
    /// Build a palette, checking length and `#RRGGBB` syntax
    pub fn new(colors: Vec<String>) -> Result<Self, PaletteError> {
        if colors.len() != CATEGORY_COUNT {
            return Err(PaletteError::WrongLength {
                expected: CATEGORY_COUNT,
                actual: colors.len(),
            });
        }

        let re = regex::Regex::new(r"^#[0-9A-Fa-f]{6}$")
            .map_err(|_| PaletteError::InvalidColor(String::new()))?;
        if let Some(bad) = colors.iter().find(|c| !re.is_match(c)) {
            return Err(PaletteError::InvalidColor(bad.clone()));
        }

        Ok(Self(colors))
    }

    /// Color for a category
    pub fn color(&self, category: Category) -> &str {
        &self.0[category.index()]
    }

    pub fn colors(&self) -> &[String] {
        &self.0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect())
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = PaletteError;

    fn try_from(colors: Vec<String>) -> Result<Self, Self::Error> {
        Palette::new(colors)
    }
}

impl From<Palette> for Vec<String> {
    fn from(palette: Palette) -> Self {
        palette.0
    }
}

/// Where the legend sits relative to the plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Right,
    Bottom,
    Left,
}

/// One bar series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarDataset {
    pub label: String,
    pub data: Vec<u64>,
    pub background_colors: Vec<String>,
    pub border_width: u32,
}

/// Everything a front end needs to draw the distribution chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartConfig {
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<BarDataset>,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub y_axis_max: u64,
    pub begin_at_zero: bool,
    pub legend_position: LegendPosition,
}

impl ChartConfig {
    /// True when there is nothing to plot
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

/// Upper bound of the count axis: the largest count rounded up to the next
/// multiple of 1000. All-zero counts give 0. Saturates at `u64::MAX` when the
/// rounded value does not fit.
pub fn axis_bound(counts: &PunctuationCounts) -> u64 {
    counts
        .max()
        .div_ceil(AXIS_STEP)
        .checked_mul(AXIS_STEP)
        .unwrap_or(u64::MAX)
}

/// Derive the chart for the given counts.
///
/// With no counts the chart has no labels and no series.
pub fn derive_chart_config(counts: Option<&PunctuationCounts>, palette: &Palette) -> ChartConfig {
    let (labels, datasets, y_axis_max) = match counts {
        Some(counts) => {
            let labels: Vec<String> = Category::ALL.iter().map(|c| c.label()).collect();
            let dataset = BarDataset {
                label: DATASET_LABEL.to_string(),
                data: counts.values().to_vec(),
                background_colors: palette.colors().to_vec(),
                border_width: 1,
            };
            (labels, vec![dataset], axis_bound(counts))
        }
        None => (Vec::new(), Vec::new(), 0),
    };

    ChartConfig {
        title: CHART_TITLE.to_string(),
        labels,
        datasets,
        x_axis_title: X_AXIS_TITLE.to_string(),
        y_axis_title: Y_AXIS_TITLE.to_string(),
        y_axis_max,
        begin_at_zero: true,
        legend_position: LegendPosition::Right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_bound_rounds_up_to_thousand() {
        let counts = PunctuationCounts::zeroed().with(Category::Apostrophes, 1200);
        assert_eq!(axis_bound(&counts), 2000);

        let counts = PunctuationCounts::zeroed().with(Category::Commas, 42);
        assert_eq!(axis_bound(&counts), 1000);
    }

    #[test]
    fn test_axis_bound_exact_multiple_is_not_bumped() {
        let counts = PunctuationCounts::zeroed().with(Category::Commas, 3000);
        assert_eq!(axis_bound(&counts), 3000);
    }

    #[test]
    fn test_axis_bound_all_zero_is_degenerate() {
        assert_eq!(axis_bound(&PunctuationCounts::zeroed()), 0);

        let chart = derive_chart_config(Some(&PunctuationCounts::zeroed()), &Palette::default());
        assert_eq!(chart.y_axis_max, 0);
        assert_eq!(chart.datasets[0].data.len(), 18);
    }

    #[test]
    fn test_axis_bound_never_falls_below_largest_count() {
        let response =
            crate::client::AnalysisResponse::from_json_str(r#"{"punctuation_counts": {"commas": 1e20}}"#)
                .unwrap();
        let counts = response.counts();
        assert_eq!(axis_bound(&counts), u64::MAX);

        let counts = PunctuationCounts::zeroed()
            .with(Category::Commas, u64::MAX)
            .with(Category::Colons, 1);
        let chart = derive_chart_config(Some(&counts), &Palette::default());
        assert_eq!(chart.y_axis_max, u64::MAX);
        assert!(chart.datasets[0].data.iter().all(|v| *v <= chart.y_axis_max));
    }

    #[test]
    fn test_empty_chart_without_counts() {
        let chart = derive_chart_config(None, &Palette::default());
        assert!(chart.is_empty());
        assert!(chart.labels.is_empty());
        assert_eq!(chart.y_axis_max, 0);
    }

    #[test]
    fn test_chart_with_counts() {
        let counts = PunctuationCounts::zeroed()
            .with(Category::Commas, 42)
            .with(Category::FullStops, 10);
        let chart = derive_chart_config(Some(&counts), &Palette::default());

        assert_eq!(chart.labels.len(), 18);
        assert_eq!(chart.labels[4], "double inverted commas");
        assert_eq!(chart.datasets.len(), 1);

        let dataset = &chart.datasets[0];
        assert_eq!(dataset.label, "Punctuation Count");
        assert_eq!(dataset.data[Category::Commas.index()], 42);
        assert_eq!(dataset.data[Category::FullStops.index()], 10);
        assert_eq!(dataset.background_colors[0], "#FF6F61");
        assert_eq!(dataset.background_colors[17], "#4A4E4D");
        assert_eq!(chart.y_axis_max, 1000);
        assert_eq!(chart.legend_position, LegendPosition::Right);
    }

    #[test]
    fn test_colors_follow_position_not_value() {
        let low = PunctuationCounts::zeroed().with(Category::Colons, 1);
        let high = PunctuationCounts::zeroed().with(Category::Colons, 9000);
        let palette = Palette::default();

        let a = derive_chart_config(Some(&low), &palette);
        let b = derive_chart_config(Some(&high), &palette);
        assert_eq!(a.datasets[0].background_colors, b.datasets[0].background_colors);
        assert_eq!(palette.color(Category::Colons), "#6B5B95");
    }

    #[test]
    fn test_palette_validation() {
        assert!(matches!(
            Palette::new(vec!["#FFFFFF".to_string()]),
            Err(PaletteError::WrongLength { expected: 18, actual: 1 })
        ));

        let mut colors: Vec<String> = DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect();
        colors[3] = "red".to_string();
        assert_eq!(
            Palette::new(colors),
            Err(PaletteError::InvalidColor("red".to_string()))
        );
    }

    #[test]
    fn test_palette_deserializes_with_validation() {
        let parsed: Result<Palette, _> = serde_json::from_str(r##"["#000000"]"##);
        assert!(parsed.is_err());
    }
}
