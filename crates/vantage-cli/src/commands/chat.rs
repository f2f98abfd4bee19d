//! Interactive chat session over a dataset.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;

use vantage::{Analyst, AnalystState, Loader, Result, Turn};

use crate::cli::LlmChoice;
use crate::render;

pub fn run(file: PathBuf, llm: LlmChoice, model: Option<String>) -> Result<()> {
    let provider = super::build_provider(llm, model)?;
    let mut analyst = Analyst::new();
    if let Some(provider) = provider {
        analyst = analyst.with_shared_llm(provider);
    }

    let (dataset, source) = Loader::new().load_file(&file)?;
    println!(
        "{} {} ({} rows, {} columns)",
        "Loaded".green().bold(),
        source.file,
        source.row_count,
        source.column_count
    );
    println!("Ask about your data. Type 'quit' to exit.\n");

    let mut state = AnalystState::new();
    state.load_dataset(dataset);

    let stdin = io::stdin();
    loop {
        print!("{} ", ">".cyan().bold());
        let _ = io::stdout().flush();

        let mut line = String::new();
        let Ok(n) = stdin.lock().read_line(&mut line) else {
            break;
        };
        if n == 0 {
            break;
        }

        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if matches!(message, "quit" | "exit") {
            break;
        }

        match analyst.handle_message(&mut state, message) {
            Turn::Clarification(question) => {
                println!("{} {}", "?".yellow().bold(), question);
            }

            Turn::Planned { plan, used_fallback } => {
                if used_fallback {
                    println!(
                        "{}",
                        "The model was unavailable; built a fallback dashboard from the column types."
                            .yellow()
                    );
                } else {
                    println!("{}", "Designed a dashboard for your request.".green());
                }
                if let Some(dataset) = state.dataset() {
                    render::render_dashboard(dataset, &plan);
                }
            }

            Turn::Revised { plan, changed } => {
                if changed {
                    println!("{}", "Updated the dashboard.".green());
                } else {
                    println!(
                        "{}",
                        "Kept the current dashboard; the revision did not produce a usable change."
                            .yellow()
                    );
                }
                if let Some(dataset) = state.dataset() {
                    render::render_dashboard(dataset, &plan);
                }
            }

            Turn::Rendered(plan) => {
                if let Some(dataset) = state.dataset() {
                    render::render_dashboard(dataset, &plan);
                }
            }

            Turn::Unhandled(note) => {
                println!("{}", note);
            }
        }
    }

    Ok(())
}
