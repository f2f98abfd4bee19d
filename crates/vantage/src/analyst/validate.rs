//! The validation filter: the sole gate between model output and the
//! session's plan.

use tracing::debug;

use crate::plan::{Aggregation, ChartSpec, KpiSpec};
use crate::profile::DatasetSummary;

/// Keep only charts whose axes both name existing columns.
///
/// Applies to every chart type, pie included: a pie's `y_axis` is its value
/// column, so column existence is the right check there too.
pub fn filter_charts(charts: Vec<ChartSpec>, summary: &DatasetSummary) -> Vec<ChartSpec> {
    charts
        .into_iter()
        .filter(|chart| {
            let keep = summary.has_column(&chart.x_axis) && summary.has_column(&chart.y_axis);
            if !keep {
                debug!(
                    chart_type = ?chart.chart_type,
                    x_axis = %chart.x_axis,
                    y_axis = %chart.y_axis,
                    "dropping chart with unknown column"
                );
            }
            keep
        })
        .collect()
}

/// Keep only KPIs whose column exists and whose aggregation fits its type.
///
/// Count works on any column; sum and mean require a numeric one.
pub fn filter_kpis(kpis: Vec<KpiSpec>, summary: &DatasetSummary) -> Vec<KpiSpec> {
    kpis.into_iter()
        .filter(|kpi| {
            let keep = summary.has_column(&kpi.column)
                && (kpi.aggregation == Aggregation::Count || summary.is_numeric(&kpi.column));
            if !keep {
                debug!(
                    label = %kpi.label,
                    column = %kpi.column,
                    aggregation = ?kpi.aggregation,
                    "dropping KPI with unknown or type-incompatible column"
                );
            }
            keep
        })
        .collect()
}
