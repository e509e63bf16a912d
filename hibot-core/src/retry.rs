//! Retry wrapper: re-invokes a failing operation up to a bounded count with a
//! fixed delay between attempts, surfacing the final failure when the budget
//! is exhausted.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::error;

use crate::error::Result;
use crate::types::{Handler, HandlerResponse, Message};

const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// Fixed-delay retry configuration: at most `max_attempts` invocations per
/// call, exactly `delay` between consecutive attempts. Immutable once a
/// wrapped operation is constructed.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// Creates a policy. An operation always runs at least once, so
    /// `max_attempts` below 1 is clamped to 1.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_DELAY)
    }
}

/// Runs `op`, re-invoking it on failure per `policy`.
///
/// Success returns immediately. Each failure is logged at error severity with
/// the attempt number; once `max_attempts` is reached the last error is
/// returned. The inter-attempt `sleep` suspends only the calling task. Every
/// error is treated as retryable here; the wrapper does not try to tell
/// transient failures from permanent ones.
pub async fn run_with_retry<T, Op, Fut>(policy: &RetryPolicy, mut op: Op) -> Result<T>
where
    Op: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 0u32;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                attempt += 1;
                error!(
                    attempt = attempt,
                    max_attempts = policy.max_attempts,
                    error = %e,
                    "Attempt failed"
                );
                if attempt >= policy.max_attempts {
                    return Err(e);
                }
                sleep(policy.delay).await;
            }
        }
    }
}

/// Wraps an inner [`Handler`] with retry semantics; the wrapped handler has an
/// identical signature, so callers cannot tell it apart from the inner one.
pub struct RetryHandler {
    inner: Arc<dyn Handler>,
    policy: RetryPolicy,
}

impl RetryHandler {
    pub fn new(inner: Arc<dyn Handler>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

#[async_trait]
impl Handler for RetryHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        run_with_retry(&self.policy, || self.inner.handle(message)).await
    }
}
