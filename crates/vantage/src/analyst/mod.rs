//! The plan negotiation loop.
//!
//! Each user turn runs: intent classification, then one of clarification,
//! plan generation, or plan revision, then the validation filter, with the
//! result stored back into the session state. Every path has a
//! deterministic fallback; nothing in this module surfaces a model failure
//! to the caller.

mod clarify;
mod intent;
mod planner;
mod revise;
mod session;
mod state;
mod validate;

pub use clarify::clarification_question;
pub use intent::{Intent, classify_intent, needs_clarification, wants_new_dashboard};
pub use planner::{FALLBACK_TEMPLATE_NAME, PlanOutcome, fallback_plan, generate_plan};
pub use revise::revise_plan;
pub use session::{Analyst, AnalystConfig, Turn};
pub use state::AnalystState;
pub use validate::{filter_charts, filter_kpis};
