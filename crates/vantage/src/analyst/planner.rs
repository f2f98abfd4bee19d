//! Plan generation: model-proposed plans with a deterministic fallback.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::session::AnalystConfig;
use super::validate::{filter_charts, filter_kpis};
use crate::error::{Result, VantageError};
use crate::llm::{LlmProvider, extract_json_object, prompts};
use crate::plan::{
    Aggregation, AnalysisSummary, ChartSpec, ChartType, DashboardPlan, KpiSpec,
};
use crate::profile::DatasetSummary;

/// Template name of deterministically generated fallback plans.
pub const FALLBACK_TEMPLATE_NAME: &str = "Dynamic Fallback Dashboard";

/// Template name of the empty placeholder substituted for unusable model
/// output, before the fallback planner takes over.
const PLACEHOLDER_TEMPLATE_NAME: &str = "Fallback Dashboard";

const MODEL_APPROACH: &str =
    "Charts and KPIs were chosen to answer the stated goal using the columns the dataset actually has.";

const FALLBACK_APPROACH: &str =
    "A minimal dashboard was derived directly from the dataset's column types.";

/// A generated plan, with a record of which path produced it.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub plan: DashboardPlan,
    pub used_fallback: bool,
}

/// Generate a validated dashboard plan.
///
/// The model path is attempted first; any failure in it, including a plan
/// that validates to empty, degrades to the deterministic fallback. This
/// function never errors.
pub fn generate_plan(
    summary: &DatasetSummary,
    user_goal: Option<&str>,
    llm: Option<&dyn LlmProvider>,
    config: &AnalystConfig,
) -> PlanOutcome {
    let result = match llm {
        Some(llm) => model_plan(summary, user_goal, llm, config),
        None => Err(VantageError::ModelUnavailable(
            "no model provider configured".to_string(),
        )),
    };

    match result {
        Ok(plan) => PlanOutcome {
            plan,
            used_fallback: false,
        },
        Err(err) => {
            warn!(error = %err, "plan generation failed, using deterministic fallback");
            let mut plan = fallback_plan(summary);
            plan.analysis_summary = Some(build_analysis_summary(
                &plan,
                user_goal.unwrap_or(""),
                FALLBACK_APPROACH,
            ));
            PlanOutcome {
                plan,
                used_fallback: true,
            }
        }
    }
}

/// Ask the model for a plan and validate it against the dataset.
fn model_plan(
    summary: &DatasetSummary,
    user_goal: Option<&str>,
    llm: &dyn LlmProvider,
    config: &AnalystConfig,
) -> Result<DashboardPlan> {
    let prompt = prompts::planning_prompt(summary, user_goal, config.max_charts, config.max_kpis);
    let response = llm.chat(&prompt)?;

    let mut plan = parse_plan_response(&response)
        .unwrap_or_else(|| DashboardPlan::empty(PLACEHOLDER_TEMPLATE_NAME));

    plan.visualizations = filter_charts(plan.visualizations, summary);
    plan.kpis = filter_kpis(plan.kpis, summary);

    // A plan that is empty on either side after validation is treated the
    // same as model failure, not as a legitimately minimal plan.
    if plan.visualizations.is_empty() || plan.kpis.is_empty() {
        return Err(VantageError::ModelMalformed(
            "plan had no usable charts or KPIs after validation".to_string(),
        ));
    }

    plan.visualizations.truncate(config.max_charts);
    plan.kpis.truncate(config.max_kpis);
    plan.analysis_summary = Some(build_analysis_summary(
        &plan,
        user_goal.unwrap_or(""),
        MODEL_APPROACH,
    ));

    Ok(plan)
}

/// Rule-based plan derived purely from column types.
///
/// Pure and deterministic; no external calls. Non-empty for any dataset
/// with at least one column: numeric-by-categorical bars when both kinds
/// exist, histograms when only numerics do, and per-group row-count bars
/// when only categoricals do.
pub fn fallback_plan(summary: &DatasetSummary) -> DashboardPlan {
    let mut plan = DashboardPlan::empty(FALLBACK_TEMPLATE_NAME);
    plan.domain = "general".to_string();

    let numeric = &summary.numeric_columns;
    let categorical = &summary.categorical_columns;

    if !numeric.is_empty() && !categorical.is_empty() {
        let y = numeric[0].as_str();
        for cat in categorical.iter().take(3) {
            plan.visualizations.push(
                ChartSpec::new(ChartType::Bar, cat.as_str(), y)
                    .with_title(format!("{} by {}", y, cat))
                    .with_purpose(format!("Compare {} across {} groups", y, cat)),
            );
        }
    } else if !numeric.is_empty() {
        for col in numeric.iter().take(3) {
            plan.visualizations.push(
                ChartSpec::new(ChartType::Histogram, col.as_str(), col.as_str())
                    .with_title(format!("Distribution of {}", col))
                    .with_purpose(format!("Show how {} is distributed", col)),
            );
        }
    } else if !categorical.is_empty() {
        for col in categorical.iter().take(3) {
            plan.visualizations.push(
                ChartSpec::new(ChartType::Bar, col.as_str(), col.as_str())
                    .with_title(format!("Rows per {}", col))
                    .with_purpose(format!("Count rows in each {} group", col)),
            );
        }
    }

    for col in numeric.iter().take(3) {
        plan.kpis.push(KpiSpec::new(
            format!("Total {}", col),
            col.as_str(),
            Aggregation::Sum,
        ));
    }

    plan
}

/// Parse a model response into a plan.
///
/// Returns `None` when no balanced JSON object is found, the span does not
/// parse, or the object lacks a `visualizations` key. Individual chart/KPI
/// entries that do not deserialize are skipped rather than failing the
/// whole plan; the validation filter handles the rest.
pub(crate) fn parse_plan_response(text: &str) -> Option<DashboardPlan> {
    let span = extract_json_object(text)?;
    let value: Value = serde_json::from_str(span).ok()?;
    let obj = value.as_object()?;

    if !obj.contains_key("visualizations") {
        return None;
    }

    let visualizations = lenient_entries::<ChartSpec>(obj.get("visualizations"));
    let kpis = lenient_entries::<KpiSpec>(obj.get("kpis"));
    let analysis_summary = obj
        .get("analysis_summary")
        .and_then(|v| serde_json::from_value::<AnalysisSummary>(v.clone()).ok());

    Some(DashboardPlan {
        template_name: string_field(obj, "template_name")
            .unwrap_or_else(|| "Dashboard".to_string()),
        domain: string_field(obj, "domain").unwrap_or_default(),
        confidence: obj
            .get("confidence")
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
            .clamp(0.0, 1.0),
        visualizations,
        kpis,
        analysis_summary,
    })
}

fn lenient_entries<T: DeserializeOwned>(value: Option<&Value>) -> Vec<T> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

fn string_field(obj: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Derive the reasoning section from the plan itself: one line per chart
/// (its purpose, falling back to its title) and one per KPI.
pub(crate) fn build_analysis_summary(
    plan: &DashboardPlan,
    user_question: &str,
    approach: &str,
) -> AnalysisSummary {
    let mut reasoning = Vec::new();

    for chart in &plan.visualizations {
        let line = if !chart.purpose.is_empty() {
            chart.purpose.clone()
        } else if !chart.title.is_empty() {
            chart.title.clone()
        } else {
            format!(
                "{} chart of {} by {}",
                chart.chart_type, chart.y_axis, chart.x_axis
            )
        };
        reasoning.push(line);
    }

    for kpi in &plan.kpis {
        reasoning.push(format!(
            "KPI '{}' tracks the {} of '{}'",
            kpi.label, kpi.aggregation, kpi.column
        ));
    }

    AnalysisSummary {
        user_question: user_question.to_string(),
        approach: approach.to_string(),
        reasoning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Dataset;

    fn summary(headers: &[&str], row: &[&str]) -> DatasetSummary {
        let ds = Dataset::new(
            headers.iter().map(|s| s.to_string()).collect(),
            vec![row.iter().map(|s| s.to_string()).collect()],
        );
        DatasetSummary::compute(&ds)
    }

    #[test]
    fn test_fallback_mixed_dataset() {
        let summary = summary(&["Age", "Fare", "Sex", "Port"], &["22", "7.25", "male", "S"]);
        let plan = fallback_plan(&summary);

        assert_eq!(plan.template_name, FALLBACK_TEMPLATE_NAME);
        assert_eq!(plan.confidence, 0.0);
        assert_eq!(plan.visualizations.len(), 2);
        for chart in &plan.visualizations {
            assert_eq!(chart.chart_type, ChartType::Bar);
            assert_eq!(chart.y_axis, "Age");
        }
        assert_eq!(plan.kpis.len(), 2);
        assert_eq!(plan.kpis[0].label, "Total Age");
        assert_eq!(plan.kpis[0].aggregation, Aggregation::Sum);
    }

    #[test]
    fn test_fallback_numeric_only() {
        let summary = summary(&["a", "b", "c", "d"], &["1", "2", "3", "4"]);
        let plan = fallback_plan(&summary);

        assert_eq!(plan.visualizations.len(), 3);
        for chart in &plan.visualizations {
            assert_eq!(chart.chart_type, ChartType::Histogram);
            assert_eq!(chart.x_axis, chart.y_axis);
        }
        assert_eq!(plan.kpis.len(), 3);
    }

    #[test]
    fn test_fallback_categorical_only() {
        let summary = summary(&["city", "team"], &["Oslo", "red"]);
        let plan = fallback_plan(&summary);

        assert_eq!(plan.visualizations.len(), 2);
        assert!(plan.kpis.is_empty());
        assert!(!plan.is_empty());
    }

    #[test]
    fn test_parse_plan_response_happy_path() {
        let text = r#"Here you go:
{"template_name": "Overview", "domain": "travel", "confidence": 0.8,
 "visualizations": [{"type": "bar", "x_axis": "Sex", "y_axis": "Fare"}],
 "kpis": [{"label": "Passengers", "column": "Sex", "aggregation": "count"}]}"#;

        let plan = parse_plan_response(text).unwrap();
        assert_eq!(plan.template_name, "Overview");
        assert_eq!(plan.visualizations.len(), 1);
        assert_eq!(plan.kpis.len(), 1);
    }

    #[test]
    fn test_parse_plan_response_requires_visualizations_key() {
        assert!(parse_plan_response(r#"{"kpis": []}"#).is_none());
        assert!(parse_plan_response("not json at all").is_none());
        assert!(parse_plan_response(r#"{"visualizations": ["#).is_none());
    }

    #[test]
    fn test_parse_plan_skips_bad_entries() {
        let text = r#"{"visualizations": [
            {"type": "bar", "x_axis": "a", "y_axis": "b"},
            {"type": "mosaic", "x_axis": "a", "y_axis": "b"},
            "nonsense"
        ], "kpis": [{"label": "x", "column": "a", "aggregation": "median"}]}"#;

        let plan = parse_plan_response(text).unwrap();
        assert_eq!(plan.visualizations.len(), 1);
        assert!(plan.kpis.is_empty());
    }

    #[test]
    fn test_confidence_clamped() {
        let plan =
            parse_plan_response(r#"{"visualizations": [], "confidence": 3.5}"#).unwrap();
        assert_eq!(plan.confidence, 1.0);
    }

    #[test]
    fn test_reasoning_prefers_purpose_then_title() {
        let mut plan = DashboardPlan::empty("t");
        plan.visualizations.push(
            ChartSpec::new(ChartType::Bar, "a", "b").with_purpose("Compare groups"),
        );
        plan.visualizations
            .push(ChartSpec::new(ChartType::Line, "a", "b").with_title("Trend over a"));
        plan.kpis
            .push(KpiSpec::new("Total b", "b", Aggregation::Sum));

        let summary = build_analysis_summary(&plan, "goal", MODEL_APPROACH);
        assert_eq!(summary.reasoning.len(), 3);
        assert_eq!(summary.reasoning[0], "Compare groups");
        assert_eq!(summary.reasoning[1], "Trend over a");
        assert!(summary.reasoning[2].contains("sum of 'b'"));
    }
}
