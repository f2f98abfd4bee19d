//! Dashboard plan model: charts, KPIs, and the analysis summary.
//!
//! These types double as the JSON exchange format with the model, so the
//! serde shapes are deliberately lenient: entry-level fields default rather
//! than failing the whole plan, and the validation filter decides what
//! survives.

mod spec;

pub use spec::{
    Aggregation, AnalysisSummary, ChartSpec, ChartType, DashboardPlan, KpiFormat, KpiSpec,
};
