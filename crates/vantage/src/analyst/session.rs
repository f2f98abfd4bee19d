//! The turn orchestrator.

use std::sync::Arc;

use tracing::info;

use super::clarify::clarification_question;
use super::intent::{Intent, classify_intent, needs_clarification, wants_new_dashboard};
use super::planner::generate_plan;
use super::revise::revise_plan;
use super::state::AnalystState;
use crate::llm::LlmProvider;
use crate::plan::DashboardPlan;

/// Tunables for the negotiation loop.
#[derive(Debug, Clone)]
pub struct AnalystConfig {
    /// Maximum charts in a generated plan.
    pub max_charts: usize,
    /// Maximum KPIs in a generated plan.
    pub max_kpis: usize,
    /// Question asked when clarification generation itself fails.
    pub fallback_question: String,
}

impl Default for AnalystConfig {
    fn default() -> Self {
        Self {
            max_charts: 5,
            max_kpis: 5,
            fallback_question:
                "What would you like this dashboard to help you decide or monitor?".to_string(),
        }
    }
}

/// The outcome of one conversation turn.
#[derive(Debug, Clone)]
pub enum Turn {
    /// A question back to the user; the next message answers it.
    Clarification(String),
    /// A freshly generated plan, already stored in the session state.
    Planned {
        plan: DashboardPlan,
        used_fallback: bool,
    },
    /// A revision pass over the existing plan. `changed` is false when the
    /// revision failed or validated to nothing and the prior plan stands.
    Revised {
        plan: DashboardPlan,
        changed: bool,
    },
    /// The current plan, echoed for re-rendering.
    Rendered(DashboardPlan),
    /// Nothing sensible to do; the message explains what is missing.
    Unhandled(String),
}

/// The conversational analyst engine.
///
/// Holds no session data itself; all per-session memory lives in the
/// `AnalystState` threaded through `handle_message`, so one engine can
/// serve any number of independent sessions.
pub struct Analyst {
    config: AnalystConfig,
    llm: Option<Arc<dyn LlmProvider>>,
}

impl Analyst {
    /// Create an analyst with default configuration and no model provider.
    ///
    /// Without a provider every planning turn degrades to the
    /// deterministic fallback, which is still a working dashboard.
    pub fn new() -> Self {
        Self::with_config(AnalystConfig::default())
    }

    /// Create an analyst with custom configuration.
    pub fn with_config(config: AnalystConfig) -> Self {
        Self { config, llm: None }
    }

    /// Add a model provider.
    pub fn with_llm(mut self, provider: impl LlmProvider + 'static) -> Self {
        self.llm = Some(Arc::new(provider));
        self
    }

    /// Add an already-shared model provider.
    pub fn with_shared_llm(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.llm = Some(provider);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &AnalystConfig {
        &self.config
    }

    /// Run one conversation turn. Total: every failure path inside
    /// resolves to a fallback value, never an error.
    pub fn handle_message(&self, state: &mut AnalystState, message: &str) -> Turn {
        // A pending clarification means this message is the answer: it
        // becomes the goal and planning proceeds immediately.
        if state.awaiting_clarification {
            state.user_goal = Some(message.to_string());
            state.awaiting_clarification = false;
            return self.plan_turn(state);
        }

        let intent = classify_intent(message);
        info!(?intent, "handling message");

        match intent {
            Intent::Clarify => self.clarify_turn(state, message),
            Intent::Analyze => {
                if needs_clarification(message) {
                    self.clarify_turn(state, message)
                } else if state.plan().is_some() && !wants_new_dashboard(message) {
                    self.revise_turn(state, message)
                } else {
                    state.user_goal = Some(message.to_string());
                    self.plan_turn(state)
                }
            }
            Intent::Revise => {
                if state.plan().is_some() {
                    self.revise_turn(state, message)
                } else {
                    // Nothing to revise yet; treat the request as a goal.
                    state.user_goal = Some(message.to_string());
                    self.plan_turn(state)
                }
            }
            Intent::Render => match state.plan() {
                Some(plan) => Turn::Rendered(plan.clone()),
                None => Turn::Unhandled(
                    "There is no dashboard yet. Tell me what you would like to see.".to_string(),
                ),
            },
        }
    }

    fn clarify_turn(&self, state: &mut AnalystState, message: &str) -> Turn {
        let question = clarification_question(
            state,
            message,
            self.llm.as_deref(),
            &self.config.fallback_question,
        );
        state.awaiting_clarification = true;
        Turn::Clarification(question)
    }

    fn plan_turn(&self, state: &mut AnalystState) -> Turn {
        state.refresh_summary();
        let Some(summary) = state.summary() else {
            return Turn::Unhandled(
                "Load a dataset before asking for a dashboard.".to_string(),
            );
        };

        let outcome = generate_plan(
            summary,
            state.user_goal.as_deref(),
            self.llm.as_deref(),
            &self.config,
        );

        state.set_plan(outcome.plan.clone());
        Turn::Planned {
            plan: outcome.plan,
            used_fallback: outcome.used_fallback,
        }
    }

    fn revise_turn(&self, state: &mut AnalystState, message: &str) -> Turn {
        state.refresh_summary();
        let (Some(summary), Some(current)) = (state.summary(), state.plan()) else {
            // Revision presupposes a dataset and a prior plan.
            return match state.plan() {
                Some(plan) => Turn::Revised {
                    plan: plan.clone(),
                    changed: false,
                },
                None => Turn::Unhandled(
                    "Load a dataset before asking for a dashboard.".to_string(),
                ),
            };
        };

        let revised = revise_plan(summary, current, message, self.llm.as_deref());
        let changed = &revised != current;

        state.set_plan(revised.clone());
        Turn::Revised {
            plan: revised,
            changed,
        }
    }
}

impl Default for Analyst {
    fn default() -> Self {
        Self::new()
    }
}
