//! Vantage CLI - conversational dashboard planning for tabular data.

mod cli;
mod commands;
mod render;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Chat { file, llm, model } => commands::chat::run(file, llm, model),

        Commands::Plan {
            file,
            goal,
            llm,
            model,
            json,
        } => commands::plan::run(file, goal, llm, model, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "vantage=debug" } else { "vantage=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
