//! Dataset summarization.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::column::{ColumnProfile, ColumnType, NumericSummary};
use crate::input::Dataset;

/// Maximum distinct sample values recorded per categorical column.
const MAX_SAMPLE_VALUES: usize = 8;

static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap(), // ISO date
        Regex::new(r"^\d{2}/\d{2}/\d{4}").unwrap(), // US date
        Regex::new(r"^\d{2}-\d{2}-\d{4}").unwrap(), // European date
        Regex::new(r"^\d{4}/\d{2}/\d{2}").unwrap(), // Alt ISO
    ]
});

/// Compact, read-only digest of a dataset for prompt inclusion and plan
/// validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Number of data rows.
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// Per-column profiles, in column order.
    pub columns: IndexMap<String, ColumnProfile>,
    /// Names of numeric columns, in column order.
    pub numeric_columns: Vec<String>,
    /// Names of categorical columns, in column order.
    pub categorical_columns: Vec<String>,
    /// Hash of the dataset this summary was computed from.
    pub source_hash: String,
}

impl DatasetSummary {
    /// Compute the summary for a dataset. Deterministic; no external calls.
    pub fn compute(dataset: &Dataset) -> Self {
        let mut columns = IndexMap::new();
        let mut numeric_columns = Vec::new();
        let mut categorical_columns = Vec::new();

        for (index, name) in dataset.headers.iter().enumerate() {
            let profile = profile_column(dataset, index, name);
            match profile.column_type {
                ColumnType::Numeric => numeric_columns.push(name.clone()),
                ColumnType::Categorical => categorical_columns.push(name.clone()),
            }
            columns.insert(name.clone(), profile);
        }

        Self {
            row_count: dataset.row_count(),
            column_count: dataset.column_count(),
            columns,
            numeric_columns,
            categorical_columns,
            source_hash: dataset.hash.clone(),
        }
    }

    /// Check whether a column with this name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Check whether the named column is numeric. Unknown names are not.
    pub fn is_numeric(&self, name: &str) -> bool {
        self.columns
            .get(name)
            .map(|c| c.column_type.is_numeric())
            .unwrap_or(false)
    }

    /// Format the summary as a schema digest for LLM prompts.
    pub fn to_prompt_string(&self) -> String {
        let mut parts = vec![format!(
            "{} rows, {} columns",
            self.row_count, self.column_count
        )];

        for profile in self.columns.values() {
            let mut line = match profile.column_type {
                ColumnType::Numeric => {
                    let stats = profile
                        .numeric
                        .map(|n| {
                            format!("mean={:.2}, min={:.2}, max={:.2}", n.mean, n.min, n.max)
                        })
                        .unwrap_or_else(|| "no values".to_string());
                    format!("- {} (numeric): {}", profile.name, stats)
                }
                ColumnType::Categorical => {
                    let samples = if profile.sample_values.is_empty() {
                        "no values".to_string()
                    } else {
                        format!("e.g. {}", profile.sample_values.join(", "))
                    };
                    format!("- {} (categorical): {}", profile.name, samples)
                }
            };
            if profile.date_like {
                line.push_str(" (date-like)");
            }
            if profile.missing_count > 0 {
                line.push_str(&format!(", {} missing", profile.missing_count));
            }
            parts.push(line);
        }

        parts.join("\n")
    }
}

/// Profile a single column.
fn profile_column(dataset: &Dataset, index: usize, name: &str) -> ColumnProfile {
    let mut missing_count = 0;
    let mut parsed = Vec::new();
    let mut all_numeric = true;
    let mut non_null_count = 0usize;
    let mut date_matches = 0usize;
    let mut samples: Vec<String> = Vec::new();

    for value in dataset.column_values(index) {
        if Dataset::is_null_value(value) {
            missing_count += 1;
            continue;
        }
        non_null_count += 1;

        let trimmed = value.trim();
        if is_date_like(trimmed) {
            date_matches += 1;
        }

        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => parsed.push(v),
            _ => all_numeric = false,
        }

        if samples.len() < MAX_SAMPLE_VALUES && !samples.iter().any(|s| s == trimmed) {
            samples.push(trimmed.to_string());
        }
    }

    let date_like = non_null_count > 0 && date_matches == non_null_count;
    let numeric = non_null_count > 0 && all_numeric && !date_like;

    if numeric {
        ColumnProfile {
            name: name.to_string(),
            column_type: ColumnType::Numeric,
            missing_count,
            numeric: NumericSummary::from_values(&parsed),
            sample_values: Vec::new(),
            date_like: false,
        }
    } else {
        ColumnProfile {
            name: name.to_string(),
            column_type: ColumnType::Categorical,
            missing_count,
            numeric: None,
            sample_values: samples,
            date_like,
        }
    }
}

/// Check whether a value matches any known date pattern.
fn is_date_like(value: &str) -> bool {
    DATE_PATTERNS.iter().any(|p| p.is_match(value))
}
