//! Image provider trait and retry logic.

use crate::error::{GenIconError, Result};
use crate::generation::types::{GeneratedImage, GenerationRequest};
use async_trait::async_trait;
use std::time::Duration;

/// Trait for image generation providers.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Generates an image from the given request with a single API call.
    ///
    /// A rate-limited call fails with [`GenIconError::RateLimited`].
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedImage>;

    /// Returns the name of this provider for display.
    fn name(&self) -> &str;
}

/// How often and how patiently to retry rate-limited requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of requests allowed, including the first.
    pub max_attempts: u32,
    /// Backoff unit; the wait after attempt `n` is `backoff_step * n`.
    pub backoff_step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_step: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    /// Creates a policy with the default backoff step.
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Self::default()
        }
    }

    /// Returns the wait after the given 1-based attempt was rate limited.
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.backoff_step * attempt
    }
}

/// Extension trait for providers with retry logic.
#[async_trait]
pub trait ImageProviderExt: ImageProvider {
    /// Generates, waiting and retrying while the API reports rate limiting.
    ///
    /// Any other error is returned immediately. If every attempt was rate
    /// limited the result is [`GenIconError::RetryExhausted`].
    async fn generate_with_retries(
        &self,
        request: &GenerationRequest,
        policy: &RetryPolicy,
    ) -> Result<GeneratedImage> {
        for attempt in 1..=policy.max_attempts {
            match self.generate(request).await {
                Ok(image) => return Ok(image),
                Err(e) if e.is_retryable() => {
                    let delay = policy.backoff(attempt);
                    tracing::warn!(
                        attempt,
                        max_attempts = policy.max_attempts,
                        delay_ms = delay.as_millis(),
                        server_hint_ms = e.retry_after().map(|d| d.as_millis()),
                        "rate limited, waiting before next attempt"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }

        Err(GenIconError::RetryExhausted {
            attempts: policy.max_attempts,
        })
    }
}

impl<T: ImageProvider> ImageProviderExt for T {}
