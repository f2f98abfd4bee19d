//! Dataset profiling: column typing and summary statistics.
//!
//! The summary is the only view of a dataset the model ever sees, and the
//! only authority the validation filter consults. It is deterministic,
//! computed without external calls, and cached per dataset version.

mod column;
mod summary;

pub use column::{ColumnProfile, ColumnType, NumericSummary};
pub use summary::DatasetSummary;
