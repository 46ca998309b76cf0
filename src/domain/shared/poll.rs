use crate::error::{AppError, AppResult};
use std::future::Future;
use std::time::Duration;

/// Fixed-interval, bounded polling schedule for asynchronous vendor jobs
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl PollPolicy {
    pub fn new(interval_ms: u64, max_attempts: u32) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
            max_attempts: max_attempts.max(1),
        }
    }
}

/// Outcome of a single status check
#[derive(Debug)]
pub enum PollStatus<T> {
    Pending,
    Ready(T),
}

/// Run `check` until it reports `Ready`, sleeping `policy.interval` between
/// attempts. Errors from `check` end polling immediately. When every attempt
/// stays pending the result is `AppError::Timeout(timeout_message)`.
pub async fn poll_until<T, F, Fut>(
    policy: PollPolicy,
    timeout_message: &str,
    mut check: F,
) -> AppResult<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = AppResult<PollStatus<T>>>,
{
    for attempt in 1..=policy.max_attempts {
        match check(attempt).await? {
            PollStatus::Ready(value) => return Ok(value),
            PollStatus::Pending => {
                tracing::debug!(
                    attempt,
                    max_attempts = policy.max_attempts,
                    "Vendor job still pending"
                );
                if attempt < policy.max_attempts {
                    tokio::time::sleep(policy.interval).await;
                }
            }
        }
    }

    Err(AppError::Timeout(timeout_message.to_string()))
}
