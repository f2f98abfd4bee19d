//! Plan type definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported chart types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    Bar,
    Line,
    Scatter,
    Pie,
    Histogram,
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Scatter => "scatter",
            ChartType::Pie => "pie",
            ChartType::Histogram => "histogram",
        };
        f.write_str(s)
    }
}

/// A single chart in a dashboard plan.
///
/// After validation, `x_axis` and `y_axis` both name existing dataset
/// columns. For pie charts `y_axis` carries the value column; for
/// histograms it equals `x_axis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Chart type.
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    /// Column plotted on the x axis (or the grouping column).
    #[serde(default)]
    pub x_axis: String,
    /// Column plotted on the y axis (or the value column).
    #[serde(default)]
    pub y_axis: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Why this chart was chosen.
    #[serde(default)]
    pub purpose: String,
}

impl ChartSpec {
    /// Create a chart spec with empty title and purpose.
    pub fn new(
        chart_type: ChartType,
        x_axis: impl Into<String>,
        y_axis: impl Into<String>,
    ) -> Self {
        Self {
            chart_type,
            x_axis: x_axis.into(),
            y_axis: y_axis.into(),
            title: String::new(),
            purpose: String::new(),
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the purpose.
    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }
}

/// Aggregation applied to a KPI column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    Count,
    Sum,
    Mean,
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Aggregation::Count => "count",
            Aggregation::Sum => "sum",
            Aggregation::Mean => "mean",
        };
        f.write_str(s)
    }
}

/// Display format for a KPI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KpiFormat {
    Percent,
}

/// A single scalar metric in a dashboard plan.
///
/// After validation, `column` names an existing dataset column, and any
/// aggregation other than count targets a numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSpec {
    /// Display label.
    #[serde(default)]
    pub label: String,
    /// Source column.
    #[serde(default)]
    pub column: String,
    /// Aggregation over the column.
    pub aggregation: Aggregation,
    /// Display unit (currency, "passengers", ...). Defaults to empty.
    #[serde(default)]
    pub unit: String,
    /// Optional display format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<KpiFormat>,
}

impl KpiSpec {
    /// Create a KPI spec with empty unit and no format.
    pub fn new(
        label: impl Into<String>,
        column: impl Into<String>,
        aggregation: Aggregation,
    ) -> Self {
        Self {
            label: label.into(),
            column: column.into(),
            aggregation,
            unit: String::new(),
            format: None,
        }
    }

    /// Set the unit.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Set the display format.
    pub fn with_format(mut self, format: KpiFormat) -> Self {
        self.format = Some(format);
        self
    }
}

/// Why each chart and KPI was chosen. Derived, not authoritative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// The user request the plan answers.
    #[serde(default)]
    pub user_question: String,
    /// How the plan was arrived at.
    #[serde(default)]
    pub approach: String,
    /// One line per chart and KPI.
    #[serde(default)]
    pub reasoning: Vec<String>,
}

/// A complete dashboard plan.
///
/// Only ever replaced wholesale by the generator, reviser, or fallback
/// planner; nothing mutates it piecemeal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardPlan {
    /// Human-readable name for the dashboard.
    #[serde(default)]
    pub template_name: String,
    /// Domain guess ("sales", "operations", ...).
    #[serde(default)]
    pub domain: String,
    /// Model confidence in the plan, clamped to [0, 1].
    #[serde(default)]
    pub confidence: f64,
    /// Charts, at most `AnalystConfig::max_charts` after generation.
    #[serde(default)]
    pub visualizations: Vec<ChartSpec>,
    /// KPIs, at most `AnalystConfig::max_kpis` after generation.
    #[serde(default)]
    pub kpis: Vec<KpiSpec>,
    /// Reasoning behind the plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_summary: Option<AnalysisSummary>,
}

impl DashboardPlan {
    /// Create an empty plan with the given template name.
    pub fn empty(template_name: impl Into<String>) -> Self {
        Self {
            template_name: template_name.into(),
            domain: String::new(),
            confidence: 0.0,
            visualizations: Vec::new(),
            kpis: Vec::new(),
            analysis_summary: None,
        }
    }

    /// True when the plan has neither charts nor KPIs.
    pub fn is_empty(&self) -> bool {
        self.visualizations.is_empty() && self.kpis.is_empty()
    }
}
