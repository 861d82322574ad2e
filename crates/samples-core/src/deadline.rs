//! Cooperative cancellation derived from the remaining Lambda execution time.
//!
//! Lambda terminates a function abruptly once its deadline passes. Downstream
//! calls are raced against a cutoff slightly before that point so handlers can
//! still answer with a 503 instead of being killed mid-flight.

use crate::constants::ABORT_PAD_FRACTION;
use crate::error::SampleError;
use std::future::Future;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::time::Instant;

/// Point in time after which downstream calls are abandoned
#[derive(Debug, Clone, Copy, Default)]
pub struct Deadline {
    cutoff: Option<Instant>,
}

impl Deadline {
    /// A deadline that never expires
    pub fn none() -> Self {
        Self { cutoff: None }
    }

    /// Builds a deadline from the remaining execution time, padded by 0.25%
    pub fn from_remaining(remaining: Duration) -> Self {
        Self::from_remaining_with_pad(remaining, None)
    }

    /// Builds a deadline from the remaining execution time and an explicit pad
    ///
    /// A budget too large to represent as an instant yields an unbounded deadline.
    pub fn from_remaining_with_pad(remaining: Duration, before_abort: Option<Duration>) -> Self {
        let budget = remaining.saturating_sub(abort_pad(remaining, before_abort));
        Self {
            cutoff: Instant::now().checked_add(budget),
        }
    }

    /// Builds a deadline from the runtime's epoch-millisecond deadline
    ///
    /// A zero deadline means the runtime did not provide one.
    pub fn from_epoch_millis(deadline_ms: u64) -> Self {
        if deadline_ms == 0 {
            return Self::none();
        }

        let deadline = UNIX_EPOCH + Duration::from_millis(deadline_ms);
        let remaining = deadline
            .duration_since(SystemTime::now())
            .unwrap_or(Duration::ZERO);

        Self::from_remaining(remaining)
    }

    /// Time left before the cutoff, `None` when unbounded
    pub fn remaining(&self) -> Option<Duration> {
        self.cutoff
            .map(|cutoff| cutoff.saturating_duration_since(Instant::now()))
    }

    pub fn is_expired(&self) -> bool {
        self.remaining().is_some_and(|left| left.is_zero())
    }

    /// Runs a downstream call, abandoning it once the cutoff passes
    pub async fn run<T, F>(&self, operation: &str, call: F) -> Result<T, SampleError>
    where
        F: Future<Output = Result<T, SampleError>>,
    {
        match self.cutoff {
            None => call.await,
            Some(cutoff) => tokio::time::timeout_at(cutoff, call).await.map_err(|_| {
                tracing::warn!(operation = operation, "Invocation deadline reached");
                SampleError::Timeout(format!("{} exceeded the invocation deadline", operation))
            })?,
        }
    }
}

/// Time reserved before the hard deadline
///
/// Defaults to 0.25% of the remaining time when no explicit pad is given.
pub fn abort_pad(remaining: Duration, before_abort: Option<Duration>) -> Duration {
    before_abort.unwrap_or_else(|| remaining.mul_f64(ABORT_PAD_FRACTION))
}

/// Per-invocation facts handed to function implementations
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    pub request_id: String,
    pub function_name: String,
    pub function_version: String,
    pub deadline: Deadline,
    /// WebSocket connection that triggered the invocation, if any
    pub connection_id: Option<String>,
}

impl Invocation {
    pub fn from_context(context: &lambda_runtime::Context) -> Self {
        Self {
            request_id: context.request_id.clone(),
            function_name: context.env_config.function_name.clone(),
            function_version: context.env_config.version.clone(),
            deadline: Deadline::from_epoch_millis(context.deadline),
            connection_id: None,
        }
    }

    pub fn with_connection_id(mut self, connection_id: impl Into<String>) -> Self {
        self.connection_id = Some(connection_id.into());
        self
    }

    pub fn with_deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = deadline;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_default_pad_is_quarter_percent() {
        let pad = abort_pad(Duration::from_secs(400), None);
        assert_eq!(pad, Duration::from_secs(1));
    }

    #[test]
    fn test_explicit_pad_wins() {
        let pad = abort_pad(Duration::from_secs(30), Some(Duration::from_secs(2)));
        assert_eq!(pad, Duration::from_secs(2));
    }

    #[test]
    fn test_pad_larger_than_remaining_expires_immediately() {
        let deadline =
            Deadline::from_remaining_with_pad(Duration::from_secs(1), Some(Duration::from_secs(5)));
        assert!(deadline.is_expired());
    }

    #[test]
    fn test_unrepresentable_budget_is_unbounded() {
        let deadline = Deadline::from_remaining_with_pad(Duration::MAX, Some(Duration::ZERO));
        assert!(deadline.remaining().is_none());
        assert!(!deadline.is_expired());
    }

    #[test]
    fn test_zero_epoch_deadline_is_unbounded() {
        let deadline = Deadline::from_epoch_millis(0);
        assert!(deadline.remaining().is_none());
        assert!(!deadline.is_expired());
    }

    #[test]
    fn test_past_epoch_deadline_is_expired() {
        let deadline = Deadline::from_epoch_millis(1_000);
        assert!(deadline.is_expired());
    }

    #[tokio::test]
    async fn test_run_completes_within_budget() {
        let deadline = Deadline::from_remaining(Duration::from_secs(5));
        let result = assert_ok!(
            deadline
                .run("fast_call", async { Ok::<_, SampleError>(42) })
                .await
        );
        assert_eq!(result, 42);
    }

    #[tokio::test]
    async fn test_run_times_out() {
        let deadline = Deadline::from_remaining(Duration::from_millis(20));
        let result = deadline
            .run("slow_call", async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok::<_, SampleError>(())
            })
            .await;

        let err = assert_err!(result);
        assert!(matches!(err, SampleError::Timeout(_)));
        assert_eq!(err.status_code(), 503);
    }

    #[tokio::test]
    async fn test_run_propagates_inner_error() {
        let result = Deadline::none()
            .run("failing_call", async {
                Err::<(), _>(SampleError::Repository("boom".to_string()))
            })
            .await;
        assert!(matches!(result, Err(SampleError::Repository(_))));
    }
}
