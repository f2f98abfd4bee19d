//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Vantage: conversational dashboard planning for tabular data
#[derive(Parser)]
#[command(name = "vantage")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Chat about a dataset and build a dashboard interactively
    Chat {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// LLM provider to use for planning
        #[arg(long, default_value = "none")]
        llm: LlmChoice,

        /// Model to use (provider-specific, e.g. "llama3.2")
        #[arg(long)]
        model: Option<String>,
    },

    /// Generate a dashboard plan for a goal in one shot
    Plan {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// What the dashboard should show
        #[arg(short, long)]
        goal: Option<String>,

        /// LLM provider to use for planning
        #[arg(long, default_value = "none")]
        llm: LlmChoice,

        /// Model to use (provider-specific, e.g. "llama3.2")
        #[arg(long)]
        model: Option<String>,

        /// Output the plan as JSON instead of rendering it
        #[arg(long)]
        json: bool,
    },
}

/// Model providers the CLI can wire up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LlmChoice {
    /// No model; every plan comes from the deterministic fallback
    None,
    /// Anthropic API (requires ANTHROPIC_API_KEY)
    Anthropic,
    /// Local Ollama instance
    Ollama,
}
