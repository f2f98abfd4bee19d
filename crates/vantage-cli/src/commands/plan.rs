//! One-shot plan generation.

use std::path::PathBuf;

use colored::Colorize;

use vantage::analyst::generate_plan;
use vantage::{AnalystConfig, DatasetSummary, Loader, Result};

use crate::cli::LlmChoice;
use crate::render;

pub fn run(
    file: PathBuf,
    goal: Option<String>,
    llm: LlmChoice,
    model: Option<String>,
    json: bool,
) -> Result<()> {
    let provider = super::build_provider(llm, model)?;

    let (dataset, source) = Loader::new().load_file(&file)?;
    let summary = DatasetSummary::compute(&dataset);

    let outcome = generate_plan(
        &summary,
        goal.as_deref(),
        provider.as_deref(),
        &AnalystConfig::default(),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.plan)?);
        return Ok(());
    }

    println!(
        "{} {} ({} rows, {} columns)",
        "Planned for".green().bold(),
        source.file,
        source.row_count,
        source.column_count
    );
    if outcome.used_fallback {
        println!(
            "{}",
            "The model was unavailable; built a fallback dashboard from the column types."
                .yellow()
        );
    }
    render::render_dashboard(&dataset, &outcome.plan);

    Ok(())
}
