//! Punctuation counts and normalization
//!
//! The analysis service may report any subset of categories, with missing or
//! falsy values. [`normalize`] turns whatever it sent into a total mapping over
//! every known [`Category`].

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::category::{Category, CATEGORY_COUNT};

/// Count per punctuation category, always covering all 18 categories
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PunctuationCounts {
    values: [u64; CATEGORY_COUNT],
}

impl PunctuationCounts {
    /// All categories at zero
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, category: Category, count: u64) -> Self {
        self.set(category, count);
        self
    }

    pub fn get(&self, category: Category) -> u64 {
        self.values[category.index()]
    }

    pub fn set(&mut self, category: Category, count: u64) {
        self.values[category.index()] = count;
    }

    /// Iterate `(category, count)` pairs in category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, u64)> + '_ {
        Category::ALL.iter().map(move |c| (*c, self.get(*c)))
    }

    /// Counts in category order
    pub fn values(&self) -> &[u64; CATEGORY_COUNT] {
        &self.values
    }

    /// Largest count across all categories (0 when everything is zero)
    pub fn max(&self) -> u64 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all counts, saturating at `u64::MAX`
    pub fn total(&self) -> u64 {
        self.values.iter().copied().fold(0, u64::saturating_add)
    }
}

/// Serializes as a JSON object keyed by wire key, in category order
impl Serialize for PunctuationCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CATEGORY_COUNT))?;
        for (category, count) in self.iter() {
            map.serialize_entry(category.key(), &count)?;
        }
        map.end()
    }
}

/// Fill a raw `category -> number` mapping into a complete [`PunctuationCounts`].
///
/// Missing categories and falsy values (`0`, `null`, `false`, `""`) read as 0.
/// Keys that are not known categories are dropped.
pub fn normalize(raw: &Map<String, Value>) -> PunctuationCounts {
    Category::ALL
        .iter()
        .fold(PunctuationCounts::zeroed(), |acc, category| {
            let count = raw.get(category.key()).map(count_from_value).unwrap_or(0);
            acc.with(*category, count)
        })
}

/// Read a count out of a JSON value.
///
/// Integers are taken as-is, finite positive floats are truncated, numeric
/// strings are parsed. Anything else, including negatives, counts as 0.
fn count_from_value(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f > 0.0)
                    .map(|f| f.trunc() as u64)
            })
            .unwrap_or(0),
        Value::String(s) => s.trim().parse::<u64>().unwrap_or(0),
        other => {
            if !other.is_null() {
                tracing::debug!(value = %other, "Ignoring non-numeric punctuation count");
            }
            0
        }
    }
}
