//! Plan revision: model-driven changes that can never destroy a working
//! plan.

use tracing::warn;

use super::planner::{build_analysis_summary, parse_plan_response};
use super::validate::{filter_charts, filter_kpis};
use crate::error::{Result, VantageError};
use crate::llm::{LlmProvider, prompts};
use crate::plan::DashboardPlan;
use crate::profile::DatasetSummary;

const REVISION_APPROACH: &str =
    "The existing dashboard was revised to reflect the follow-up request, keeping charts and KPIs that were still relevant.";

/// Revise an existing plan based on a follow-up request.
///
/// The revision is parsed and validated exactly like a generated plan. A
/// revision that fails, or that validates to nothing, leaves the prior plan
/// in place; this function never errors and never returns an empty plan
/// when given a non-empty one.
pub fn revise_plan(
    summary: &DatasetSummary,
    current: &DashboardPlan,
    request: &str,
    llm: Option<&dyn LlmProvider>,
) -> DashboardPlan {
    let result = match llm {
        Some(llm) => model_revision(summary, current, request, llm),
        None => Err(VantageError::ModelUnavailable(
            "no model provider configured".to_string(),
        )),
    };

    match result {
        Ok(plan) => plan,
        Err(err) => {
            warn!(error = %err, "plan revision failed, keeping current plan");
            current.clone()
        }
    }
}

fn model_revision(
    summary: &DatasetSummary,
    current: &DashboardPlan,
    request: &str,
    llm: &dyn LlmProvider,
) -> Result<DashboardPlan> {
    let prompt = prompts::revision_prompt(summary, current, request);
    let response = llm.chat(&prompt)?;

    let mut plan = parse_plan_response(&response).ok_or_else(|| {
        VantageError::ModelMalformed("no plan object in revision response".to_string())
    })?;

    plan.visualizations = filter_charts(plan.visualizations, summary);
    plan.kpis = filter_kpis(plan.kpis, summary);

    // A revision must never degrade a working plan to nothing.
    if plan.is_empty() {
        return Err(VantageError::ModelMalformed(
            "revision was empty after validation".to_string(),
        ));
    }

    if plan.analysis_summary.is_none() {
        plan.analysis_summary = Some(build_analysis_summary(&plan, request, REVISION_APPROACH));
    }

    Ok(plan)
}
