//! Model capability: a single `chat(prompt) -> text` seam.
//!
//! The planner treats every response as an untrusted external format.
//! Providers only transport text; extraction and validation of structured
//! content happen on the caller's side, and any provider failure degrades
//! to a deterministic fallback rather than surfacing to the user.
//!
//! # Supported Providers
//!
//! - **Anthropic** - Claude models via API (requires `ANTHROPIC_API_KEY`)
//! - **Ollama** - Local models, no API key needed (requires Ollama installed)
//! - **Mock** - Scripted responses for tests

mod anthropic;
mod extract;
mod mock;
mod ollama;
pub mod prompts;
mod provider;

pub use anthropic::AnthropicProvider;
pub use extract::extract_json_object;
pub use mock::MockProvider;
pub use ollama::OllamaProvider;
pub use provider::{LlmConfig, LlmProvider};
