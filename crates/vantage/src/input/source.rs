//! In-memory dataset representation and source metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata about the file a dataset was loaded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a loaded file.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            row_count,
            column_count,
            loaded_at: Utc::now(),
        }
    }
}

/// A loaded tabular dataset: ordered named columns of string cells.
///
/// Immutable within a conversation turn; owned by the session state.
/// The content hash doubles as a version key so derived summaries can be
/// invalidated when a new dataset replaces this one.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Column headers, in file order.
    pub headers: Vec<String>,
    /// Row data as strings (row-major order).
    pub rows: Vec<Vec<String>>,
    /// SHA-256 hash of the source contents.
    pub hash: String,
}

impl Dataset {
    /// Create a dataset from headers and rows.
    ///
    /// The hash is derived from the content when not loading from a file,
    /// so two identical in-memory datasets share a version key.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        for h in &headers {
            hasher.update(h.as_bytes());
            hasher.update([0u8]);
        }
        for row in &rows {
            for cell in row {
                hasher.update(cell.as_bytes());
                hasher.update([0u8]);
            }
        }
        let hash = format!("sha256:{:x}", hasher.finalize());

        Self {
            headers,
            rows,
            hash,
        }
    }

    /// Create a dataset with a precomputed content hash.
    pub fn with_hash(headers: Vec<String>, rows: Vec<Vec<String>>, hash: String) -> Self {
        Self {
            headers,
            rows,
            hash,
        }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check whether a column with this name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Get the position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Get all values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(|s| s.as_str()).unwrap_or(""))
    }

    /// Get a column by name.
    pub fn column_by_name(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.column_index(name)?;
        Some(self.column_values(index).collect())
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// Check if a value represents a missing/null value.
    pub fn is_null_value(value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("na")
            || trimmed.eq_ignore_ascii_case("n/a")
            || trimmed.eq_ignore_ascii_case("nan")
            || trimmed.eq_ignore_ascii_case("null")
            || trimmed.eq_ignore_ascii_case("none")
            || trimmed.eq_ignore_ascii_case("nil")
            || trimmed == "."
            || trimmed == "-"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_access() {
        let ds = Dataset::new(
            vec!["name".into(), "age".into()],
            vec![
                vec!["Alice".into(), "30".into()],
                vec!["Bob".into(), "25".into()],
            ],
        );

        assert_eq!(ds.column_count(), 2);
        assert_eq!(ds.row_count(), 2);
        assert!(ds.has_column("age"));
        assert!(!ds.has_column("Age"));
        assert_eq!(ds.column_by_name("name"), Some(vec!["Alice", "Bob"]));
        assert_eq!(ds.get(1, 1), Some("25"));
    }

    #[test]
    fn test_content_hash_is_stable() {
        let a = Dataset::new(vec!["x".into()], vec![vec!["1".into()]]);
        let b = Dataset::new(vec!["x".into()], vec![vec!["1".into()]]);
        let c = Dataset::new(vec!["x".into()], vec![vec!["2".into()]]);

        assert_eq!(a.hash, b.hash);
        assert_ne!(a.hash, c.hash);
    }

    #[test]
    fn test_is_null_value() {
        assert!(Dataset::is_null_value(""));
        assert!(Dataset::is_null_value("NA"));
        assert!(Dataset::is_null_value("n/a"));
        assert!(Dataset::is_null_value("NaN"));
        assert!(Dataset::is_null_value("null"));
        assert!(Dataset::is_null_value("."));
        assert!(!Dataset::is_null_value("value"));
        assert!(!Dataset::is_null_value("0"));
    }
}
