//! Prompt templates for LLM interactions.

use crate::plan::DashboardPlan;
use crate::profile::DatasetSummary;

/// Build a prompt asking the model to propose a dashboard plan.
pub fn planning_prompt(
    summary: &DatasetSummary,
    user_goal: Option<&str>,
    max_charts: usize,
    max_kpis: usize,
) -> String {
    let goal = user_goal.unwrap_or("Give a useful overview of this dataset.");

    format!(
        r#"Design a dashboard for the dataset described below.

## Dataset
{}

## User goal
{}

## Task
Propose up to {} charts and up to {} KPIs that best answer the user's goal.
Use only column names that appear in the dataset description, spelled
exactly as shown. Chart types: bar, line, scatter, pie, histogram. For pie
charts put the category column in x_axis and the value column in y_axis.
For histograms use the same column for both axes. KPI aggregations: count,
sum, mean; sum and mean are only valid for numeric columns.

Respond with a single JSON object:
{{
  "template_name": "Short dashboard name",
  "domain": "Domain guess, e.g. sales, operations",
  "confidence": 0.0-1.0,
  "visualizations": [
    {{"type": "bar", "x_axis": "column", "y_axis": "column",
      "title": "Chart title", "purpose": "What this chart shows"}}
  ],
  "kpis": [
    {{"label": "KPI label", "column": "column", "aggregation": "count|sum|mean",
      "unit": "", "format": null}}
  ]
}}"#,
        summary.to_prompt_string(),
        goal,
        max_charts,
        max_kpis,
    )
}

/// Build a prompt asking the model to revise an existing plan.
pub fn revision_prompt(
    summary: &DatasetSummary,
    current_plan: &DashboardPlan,
    request: &str,
) -> String {
    let plan_json = serde_json::to_string_pretty(current_plan)
        .unwrap_or_else(|_| "Unable to serialize plan".to_string());

    format!(
        r#"Revise an existing dashboard plan based on a follow-up request.

## Dataset
{}

## Current plan
{}

## Request
{}

## Task
Modify only what the request calls for and keep every chart and KPI that is
still relevant. Use only column names that appear in the dataset
description, spelled exactly as shown. If the request does not warrant a
change, return the plan unchanged. Update the analysis_summary to reflect
the revision.

Respond with the complete revised plan as a single JSON object in the same
shape as the current plan."#,
        summary.to_prompt_string(),
        plan_json,
        request,
    )
}

/// Build a prompt asking the model for one clarification question.
pub fn clarification_prompt(summary: &DatasetSummary, message: &str) -> String {
    format!(
        r#"A user wants a dashboard but their request is too vague to act on.

## Dataset
{}

## Request
"{}"

## Task
Identify the single most important detail missing from the request, and ask
for it. Respond with exactly one short question on the first line and
nothing else."#,
        summary.to_prompt_string(),
        message,
    )
}

/// System prompt for all Vantage LLM interactions.
pub fn system_prompt() -> &'static str {
    r#"You are a data analyst assistant for Vantage, a dashboard planning tool.

Your role is to:
1. Propose dashboard plans (charts and KPIs) for tabular datasets
2. Revise existing plans based on follow-up requests
3. Ask focused clarification questions when a request is too vague

Guidelines:
- Reference only columns that exist in the dataset description
- Prefer a few high-signal charts over many weak ones
- Pair every chart with a stated purpose
- Always respond with valid JSON when requested"#
}
