use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::{ServiceError, TextGenerator};

/// A recorded call: (prompt, system instruction).
pub type RecordedCall = (String, String);

/// A generator for tests that returns preconfigured replies and records
/// every prompt it receives.
pub struct MockGenerator {
    /// Replies consumed in order before `default` applies.
    script: Mutex<VecDeque<Result<String, String>>>,
    default: Result<String, String>,
    delay: Option<Duration>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockGenerator {
    fn with_default(default: Result<String, String>) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            default,
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that always answers with `text`.
    pub fn reply(text: &str) -> Self {
        Self::with_default(Ok(text.to_string()))
    }

    /// Create a mock that always fails with an HTTP error.
    pub fn failing(message: &str) -> Self {
        Self::with_default(Err(message.to_string()))
    }

    /// Create a mock that answers from `script` in order, then fails.
    pub fn scripted(script: Vec<Result<&str, &str>>) -> Self {
        let mock = Self::with_default(Err("mock script exhausted".to_string()));
        *mock.script.lock().unwrap() = script
            .into_iter()
            .map(|r| r.map(String::from).map_err(String::from))
            .collect();
        mock
    }

    /// Sleep before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(
        &self,
        prompt: &str,
        system_instruction: &str,
    ) -> Result<String, ServiceError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), system_instruction.to_string()));

        let outcome = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.default.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        outcome.map_err(ServiceError::Http)
    }
}
