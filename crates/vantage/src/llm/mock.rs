//! Mock LLM provider for testing.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::provider::{LlmConfig, LlmProvider};
use crate::error::{Result, VantageError};

/// A single scripted outcome for a `chat` call.
enum Scripted {
    Reply(String),
    Failure(String),
}

/// Mock LLM provider that replays scripted responses for testing.
///
/// Responses are consumed in order, one per `chat` call. When the script
/// runs out, `chat` fails with `ModelUnavailable`, so a test that expects
/// no model contact can simply assert `calls() == 0`.
pub struct MockProvider {
    config: LlmConfig,
    script: Mutex<VecDeque<Scripted>>,
    calls: Mutex<usize>,
}

impl MockProvider {
    /// Create a mock with an empty script; every call fails.
    pub fn new() -> Self {
        Self {
            config: LlmConfig {
                model: "mock".to_string(),
                ..LlmConfig::default()
            },
            script: Mutex::new(VecDeque::new()),
            calls: Mutex::new(0),
        }
    }

    /// Queue a successful reply.
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Reply(text.into()));
        self
    }

    /// Queue a failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Failure(message.into()));
        self
    }

    /// Number of `chat` calls made so far.
    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LlmProvider for MockProvider {
    fn chat(&self, _prompt: &str) -> Result<String> {
        *self.calls.lock().unwrap() += 1;

        match self.script.lock().unwrap().pop_front() {
            Some(Scripted::Reply(text)) => Ok(text),
            Some(Scripted::Failure(message)) => Err(VantageError::ModelUnavailable(message)),
            None => Err(VantageError::ModelUnavailable(
                "mock: no scripted response".to_string(),
            )),
        }
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "mock"
    }
}
