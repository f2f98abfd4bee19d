//! Per-session memory.

use std::collections::VecDeque;

use crate::input::Dataset;
use crate::plan::DashboardPlan;
use crate::profile::DatasetSummary;

/// The agent's memory across turns of one session.
///
/// Owned and explicitly passed: one instance per logical session, mutated
/// by every turn, discarded at session end. Nothing here persists.
///
/// The dataset and its summary are private so they can only change
/// together: loading a dataset drops the cached summary, and the summary is
/// recomputed against the dataset's content hash, never a stale one.
#[derive(Default)]
pub struct AnalystState {
    dataset: Option<Dataset>,
    summary: Option<DatasetSummary>,
    plan: Option<DashboardPlan>,
    /// What the user ultimately wants out of the dashboard.
    pub user_goal: Option<String>,
    /// Clarification questions asked but not yet answered, oldest first.
    pub unanswered_questions: VecDeque<String>,
    /// Whether the next message should be read as a clarification answer.
    pub awaiting_clarification: bool,
}

impl AnalystState {
    /// Create empty session state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the session's dataset, invalidating the cached summary.
    pub fn load_dataset(&mut self, dataset: Dataset) {
        self.dataset = Some(dataset);
        self.summary = None;
    }

    /// The current dataset, if one is loaded.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// The cached summary, if current. Call `refresh_summary` first.
    pub fn summary(&self) -> Option<&DatasetSummary> {
        match (&self.summary, &self.dataset) {
            (Some(summary), Some(dataset)) if summary.source_hash == dataset.hash => {
                Some(summary)
            }
            _ => None,
        }
    }

    /// Recompute the summary if the dataset changed since it was cached.
    pub fn refresh_summary(&mut self) {
        let Some(dataset) = self.dataset.as_ref() else {
            self.summary = None;
            return;
        };

        let stale = self
            .summary
            .as_ref()
            .map(|s| s.source_hash != dataset.hash)
            .unwrap_or(true);

        if stale {
            let summary = DatasetSummary::compute(dataset);
            self.summary = Some(summary);
        }
    }

    /// Refresh and return the summary in one step.
    pub fn ensure_summary(&mut self) -> Option<&DatasetSummary> {
        self.refresh_summary();
        self.summary.as_ref()
    }

    /// The current dashboard plan.
    pub fn plan(&self) -> Option<&DashboardPlan> {
        self.plan.as_ref()
    }

    /// Replace the plan wholesale.
    pub fn set_plan(&mut self, plan: DashboardPlan) {
        self.plan = Some(plan);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(tag: &str) -> Dataset {
        Dataset::new(
            vec!["age".into(), "label".into()],
            vec![vec!["30".into(), tag.into()]],
        )
    }

    #[test]
    fn test_summary_cached_per_dataset_version() {
        let mut state = AnalystState::new();
        assert!(state.ensure_summary().is_none());

        state.load_dataset(dataset("a"));
        let hash_a = state.ensure_summary().unwrap().source_hash.clone();
        assert_eq!(hash_a, state.dataset().unwrap().hash);

        // Same dataset again: no invalidation.
        assert_eq!(state.ensure_summary().unwrap().source_hash, hash_a);

        // New dataset: summary follows.
        state.load_dataset(dataset("b"));
        assert!(state.summary().is_none());
        let hash_b = state.ensure_summary().unwrap().source_hash.clone();
        assert_ne!(hash_a, hash_b);
    }

    #[test]
    fn test_plan_replaced_wholesale() {
        let mut state = AnalystState::new();
        assert!(state.plan().is_none());

        state.set_plan(DashboardPlan::empty("One"));
        state.set_plan(DashboardPlan::empty("Two"));
        assert_eq!(state.plan().unwrap().template_name, "Two");
    }
}
