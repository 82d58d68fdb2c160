//! Punctuation categories
//!
//! The fixed, ordered set of punctuation marks the analysis service reports on.
//! The order here is the order of the results list and of the chart bars.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of known punctuation categories
pub const CATEGORY_COUNT: usize = 18;

/// A punctuation mark category reported by the analysis service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Apostrophes,
    Colons,
    Commas,
    CurlyBrackets,
    DoubleInvertedCommas,
    Ellipses,
    EmDashes,
    EnDashes,
    ExclamationMarks,
    FullStops,
    Hyphens,
    OtherPunctuationMarks,
    QuestionMarks,
    RoundBrackets,
    Semicolons,
    Slashes,
    SquareBrackets,
    VerticalBars,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Apostrophes,
        Category::Colons,
        Category::Commas,
        Category::CurlyBrackets,
        Category::DoubleInvertedCommas,
        Category::Ellipses,
        Category::EmDashes,
        Category::EnDashes,
        Category::ExclamationMarks,
        Category::FullStops,
        Category::Hyphens,
        Category::OtherPunctuationMarks,
        Category::QuestionMarks,
        Category::RoundBrackets,
        Category::Semicolons,
        Category::Slashes,
        Category::SquareBrackets,
        Category::VerticalBars,
    ];

    /// Wire key used by the analysis service (e.g. `full_stops`)
    pub const fn key(self) -> &'static str {
        match self {
            Category::Apostrophes => "apostrophes",
            Category::Colons => "colons",
            Category::Commas => "commas",
            Category::CurlyBrackets => "curly_brackets",
            Category::DoubleInvertedCommas => "double_inverted_commas",
            Category::Ellipses => "ellipses",
            Category::EmDashes => "em_dashes",
            Category::EnDashes => "en_dashes",
            Category::ExclamationMarks => "exclamation_marks",
            Category::FullStops => "full_stops",
            Category::Hyphens => "hyphens",
            Category::OtherPunctuationMarks => "other_punctuation_marks",
            Category::QuestionMarks => "question_marks",
            Category::RoundBrackets => "round_brackets",
            Category::Semicolons => "semicolons",
            Category::Slashes => "slashes",
            Category::SquareBrackets => "square_brackets",
            Category::VerticalBars => "vertical_bars",
        }
    }

    /// Display label: the wire key with underscores replaced by spaces.
    ///
    /// Casing is left to the presentation layer.
    pub fn label(self) -> String {
        self.key().replace('_', " ")
    }

    /// Position of this category in [`Category::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a key does not name a known category
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown punctuation category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.key() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
