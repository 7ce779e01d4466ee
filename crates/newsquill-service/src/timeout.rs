use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::{ServiceError, TextGenerator};

/// Races every call to the inner generator against a fixed deadline.
pub struct TimeoutGenerator<G> {
    inner: G,
    timeout: Duration,
}

impl<G: TextGenerator> TimeoutGenerator<G> {
    pub fn new(inner: G, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl<G: TextGenerator> TextGenerator for TimeoutGenerator<G> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn generate(
        &self,
        prompt: &str,
        system_instruction: &str,
    ) -> Result<String, ServiceError> {
        match tokio::time::timeout(self.timeout, self.inner.generate(prompt, system_instruction))
            .await
        {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    "{} did not answer within {:?}, abandoning call",
                    self.inner.name(),
                    self.timeout
                );
                Err(ServiceError::Timeout(self.timeout))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockGenerator;

    #[tokio::test(start_paused = true)]
    async fn slow_generator_times_out() {
        let slow = MockGenerator::reply("late").with_delay(Duration::from_secs(60));
        let bounded = TimeoutGenerator::new(slow, Duration::from_secs(5));
        match bounded.generate("p", "s").await {
            Err(ServiceError::Timeout(d)) => assert_eq!(d, Duration::from_secs(5)),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fast_generator_passes_through() {
        let fast = MockGenerator::reply("on time").with_delay(Duration::from_secs(1));
        let bounded = TimeoutGenerator::new(fast, Duration::from_secs(5));
        assert_eq!(bounded.generate("p", "s").await.unwrap(), "on time");
        assert_eq!(bounded.name(), "mock");
    }

    #[tokio::test]
    async fn inner_errors_pass_through() {
        let failing = MockGenerator::failing("boom");
        let bounded = TimeoutGenerator::new(failing, Duration::from_secs(5));
        assert!(matches!(
            bounded.generate("p", "s").await,
            Err(ServiceError::Http(_))
        ));
    }
}
