//! LLM provider trait and configuration.

use crate::error::Result;

/// Configuration for LLM providers.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Model to use (e.g., "claude-sonnet-4-20250514").
    pub model: String,

    /// Maximum tokens in response.
    pub max_tokens: usize,

    /// Temperature for generation (0.0-1.0).
    pub temperature: f64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 1024,
            temperature: 0.2,
        }
    }
}

/// Trait for LLM providers.
///
/// Implementations must be thread-safe (Send + Sync) to allow sharing
/// across sessions. No contract on latency or determinism; callers must
/// treat any response shape deviation as failure.
pub trait LlmProvider: Send + Sync {
    /// Send a prompt and return the model's free-form text response.
    fn chat(&self, prompt: &str) -> Result<String>;

    /// Get the configuration for this provider.
    fn config(&self) -> &LlmConfig;

    /// Get the name of this provider (for logging/debugging).
    fn name(&self) -> &str;
}
