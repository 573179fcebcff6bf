//! Retry state and sleeping.

use std::time::Duration;

use async_trait::async_trait;

/// Where a fetch is in its retry cycle.
///
/// Attempts are numbered from 1. `Backoff(n)` means attempt `n` failed and
/// attempt `n + 1` is scheduled.
#[derive(Debug)]
pub(crate) enum RetryState<T, E> {
    Attempting(u32),
    Backoff(u32),
    Succeeded(T),
    Exhausted { attempts: u32, last: E },
}

impl<T, E> RetryState<T, E> {
    /// Transition after attempt `attempt` finished with `outcome`.
    pub(crate) fn after_attempt(attempt: u32, max_attempts: u32, outcome: Result<T, E>) -> Self {
        match outcome {
            Ok(payload) => RetryState::Succeeded(payload),
            Err(last) if attempt >= max_attempts => RetryState::Exhausted {
                attempts: attempt,
                last,
            },
            Err(_) => RetryState::Backoff(attempt),
        }
    }
}

/// Linear backoff: the delay after failed attempt `n` is `base * n`.
pub(crate) fn linear_backoff(base: Duration, attempt: u32) -> Duration {
    base.saturating_mul(attempt)
}

/// Something that can wait for a duration.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Wait for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_backoff() {
        let base = Duration::from_millis(500);
        assert_eq!(linear_backoff(base, 1), Duration::from_millis(500));
        assert_eq!(linear_backoff(base, 2), Duration::from_millis(1000));
        assert_eq!(linear_backoff(base, 3), Duration::from_millis(1500));
    }

    #[test]
    fn test_failure_with_attempts_left_backs_off() {
        let state = RetryState::<(), &str>::after_attempt(1, 3, Err("boom"));
        assert!(matches!(state, RetryState::Backoff(1)));
    }

    #[test]
    fn test_failure_on_last_attempt_exhausts() {
        let state = RetryState::<(), &str>::after_attempt(3, 3, Err("boom"));
        assert!(matches!(
            state,
            RetryState::Exhausted { attempts: 3, last: "boom" }
        ));
    }

    #[test]
    fn test_success_on_any_attempt() {
        let state = RetryState::<u8, &str>::after_attempt(3, 3, Ok(7));
        assert!(matches!(state, RetryState::Succeeded(7)));
    }
}
