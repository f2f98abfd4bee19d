//! Vantage: conversational dashboard planning for tabular datasets.
//!
//! Vantage turns a loaded dataset and a chat conversation into a validated
//! dashboard plan (charts + KPIs). A language model proposes and revises
//! the plan; deterministic logic decides when to ask for clarification,
//! validates every plan against the dataset's actual schema, and falls back
//! to a rule-based plan whenever model output is unusable.
//!
//! # Core Principles
//!
//! - **Extract, then validate**: model responses are untrusted text; a plan
//!   only reaches the session after schema validation
//! - **Always a plan**: every failure path degrades to a deterministic
//!   fallback, never to an error in the user's face
//! - **Non-destructive revision**: a failed revision leaves the prior plan
//!   untouched
//!
//! # Example
//!
//! ```no_run
//! use vantage::{Analyst, AnalystState, Loader, Turn};
//!
//! let (dataset, _source) = Loader::new().load_file("passengers.csv").unwrap();
//!
//! let analyst = Analyst::new();
//! let mut state = AnalystState::new();
//! state.load_dataset(dataset);
//!
//! match analyst.handle_message(&mut state, "show survival by class") {
//!     Turn::Planned { plan, .. } => println!("{} charts", plan.visualizations.len()),
//!     turn => println!("{:?}", turn),
//! }
//! ```

pub mod analyst;
pub mod error;
pub mod input;
pub mod llm;
pub mod plan;
pub mod profile;

pub use analyst::{Analyst, AnalystConfig, AnalystState, Intent, Turn};
pub use error::{Result, VantageError};
pub use input::{Dataset, Loader, LoaderConfig, SourceMetadata};
pub use llm::{AnthropicProvider, LlmConfig, LlmProvider, MockProvider, OllamaProvider};
pub use plan::{
    Aggregation, AnalysisSummary, ChartSpec, ChartType, DashboardPlan, KpiFormat, KpiSpec,
};
pub use profile::{ColumnProfile, ColumnType, DatasetSummary, NumericSummary};
