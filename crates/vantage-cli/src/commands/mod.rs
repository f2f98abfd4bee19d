//! CLI command implementations.

pub mod chat;
pub mod plan;

use std::sync::Arc;

use vantage::{AnthropicProvider, LlmConfig, LlmProvider, OllamaProvider, Result, VantageError};

use crate::cli::LlmChoice;

/// Build the selected model provider, if any.
pub fn build_provider(
    choice: LlmChoice,
    model: Option<String>,
) -> Result<Option<Arc<dyn LlmProvider>>> {
    match choice {
        LlmChoice::None => Ok(None),

        LlmChoice::Anthropic => {
            let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
                VantageError::Config(
                    "ANTHROPIC_API_KEY environment variable not set".to_string(),
                )
            })?;
            let config = match model {
                Some(model) => LlmConfig {
                    model,
                    ..LlmConfig::default()
                },
                None => LlmConfig::default(),
            };
            let provider = AnthropicProvider::with_config(api_key, config)?;
            Ok(Some(Arc::new(provider)))
        }

        LlmChoice::Ollama => {
            let provider = match model {
                Some(model) => OllamaProvider::with_model(model)?,
                None => OllamaProvider::new()?,
            };
            Ok(Some(Arc::new(provider)))
        }
    }
}
