use std::time::Duration;

use serde::Serialize;

use crate::args::FailurePolicy;
use crate::error::DriverError;

/// Aggregated outcome of one run.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RunSummary {
    pub total: u64,
    pub succeeded: u64,
    pub failed: u64,
    /// Requests aborted before completing (fail-fast or shutdown).
    pub not_sent: u64,
    pub first_error: Option<String>,
    pub elapsed_ms: u64,
    pub interrupted: bool,
    pub failure_policy: FailurePolicy,
}

impl RunSummary {
    #[must_use]
    pub const fn new(total: u64, failure_policy: FailurePolicy) -> Self {
        Self {
            total,
            succeeded: 0,
            failed: 0,
            not_sent: 0,
            first_error: None,
            elapsed_ms: 0,
            interrupted: false,
            failure_policy,
        }
    }

    pub const fn record_success(&mut self) {
        self.succeeded = self.succeeded.saturating_add(1);
    }

    /// Counts a failure; returns true when it is the first one.
    pub fn record_failure(&mut self, message: String) -> bool {
        self.failed = self.failed.saturating_add(1);
        if self.first_error.is_none() {
            self.first_error = Some(message);
            return true;
        }
        false
    }

    pub const fn record_not_sent(&mut self) {
        self.not_sent = self.not_sent.saturating_add(1);
    }

    pub fn finish(&mut self, elapsed: Duration, interrupted: bool) {
        self.elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self.interrupted = interrupted;
    }

    #[must_use]
    pub const fn completed(&self) -> u64 {
        self.succeeded.saturating_add(self.failed)
    }

    /// Success rate in hundredths of a percent (`9950` = 99.50%).
    #[must_use]
    pub fn success_rate_x100(&self) -> u64 {
        if self.total == 0 {
            return 0;
        }
        let scaled = u128::from(self.succeeded)
            .saturating_mul(10_000)
            .checked_div(u128::from(self.total))
            .unwrap_or(0);
        u64::try_from(scaled).unwrap_or(u64::MAX)
    }

    /// Average completed requests per second in hundredths.
    #[must_use]
    pub fn avg_rps_x100(&self) -> u64 {
        let elapsed_ms = u128::from(self.elapsed_ms.max(1));
        let scaled = u128::from(self.completed())
            .saturating_mul(100_000)
            .checked_div(elapsed_ms)
            .unwrap_or(0);
        u64::try_from(scaled).unwrap_or(u64::MAX)
    }

    /// Maps the summary to the process outcome.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Interrupted`] when the run was cut short and
    /// [`DriverError::RequestsFailed`] when any request failed.
    pub const fn outcome(&self) -> Result<(), DriverError> {
        if self.interrupted {
            return Err(DriverError::Interrupted {
                completed: self.completed(),
                total: self.total,
            });
        }
        if self.failed > 0 {
            return Err(DriverError::RequestsFailed {
                failed: self.failed,
                total: self.total,
            });
        }
        Ok(())
    }
}
