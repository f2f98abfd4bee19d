//! Per-column profile types.

use serde::{Deserialize, Serialize};

/// Inferred semantic type for a column.
///
/// Every column is exactly one of these; there is no "unknown". Columns
/// whose non-null values all parse as numbers are numeric, everything else
/// groups as categorical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// All non-null values parse as numbers.
    Numeric,
    /// Everything else: text, labels, identifiers, dates.
    Categorical,
}

impl ColumnType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Numeric)
    }
}

/// Statistics for a numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl NumericSummary {
    /// Compute mean/min/max in a single pass.
    ///
    /// Returns `None` for an empty slice, so columns with no parseable
    /// values summarize to null rather than failing.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut mean = 0.0;

        for (i, &v) in values.iter().enumerate() {
            // Streaming mean keeps the sum from overflowing on large inputs.
            mean += (v - mean) / (i as f64 + 1.0);
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }

        Some(Self { mean, min, max })
    }
}

/// Profile of a single column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Column name.
    pub name: String,
    /// Inferred type.
    pub column_type: ColumnType,
    /// Number of null/missing values.
    pub missing_count: usize,
    /// Numeric statistics, present for numeric columns with data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericSummary>,
    /// Distinct sample values, for categorical columns.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sample_values: Vec<String>,
    /// Whether the values look like calendar dates.
    #[serde(default)]
    pub date_like: bool,
}
