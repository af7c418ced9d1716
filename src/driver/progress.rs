use std::io::Write;

use crate::args::PositiveU64;

/// Markers per run when `total` is a multiple of 100.
const MARKERS_PER_RUN: u64 = 100;

/// Emits a percentage marker every `ceil(total / 100)` completions and on the
/// final one.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    total: u64,
    step: u64,
    completed: u64,
}

impl ProgressTracker {
    #[must_use]
    pub const fn new(total: PositiveU64) -> Self {
        let total = total.get();
        Self {
            total,
            step: total.div_ceil(MARKERS_PER_RUN),
            completed: 0,
        }
    }

    /// Counts one completion and returns the percentage to report, if this
    /// completion lands on a marker. Completions past `total` are ignored.
    pub fn record(&mut self) -> Option<u64> {
        if self.completed >= self.total {
            return None;
        }
        self.completed = self.completed.saturating_add(1);

        let on_step = self
            .completed
            .checked_rem(self.step)
            .is_some_and(|remainder| remainder == 0);
        if on_step || self.completed == self.total {
            Some(self.percent())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn completed(&self) -> u64 {
        self.completed
    }

    #[must_use]
    pub fn percent(&self) -> u64 {
        let scaled = u128::from(self.completed)
            .saturating_mul(100)
            .checked_div(u128::from(self.total))
            .unwrap_or(0);
        u64::try_from(scaled).unwrap_or(100)
    }
}

/// Receives progress markers and the end-of-run signal.
pub trait ProgressSink {
    fn marker(&mut self, percent: u64);

    fn finish(&mut self);
}

/// Prints `NN%` lines to stdout and a blank line when the run ends.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutProgress;

impl ProgressSink for StdoutProgress {
    fn marker(&mut self, percent: u64) {
        let mut out = std::io::stdout().lock();
        drop(writeln!(out, "{}%", percent));
    }

    fn finish(&mut self) {
        let mut out = std::io::stdout().lock();
        drop(writeln!(out));
        drop(out.flush());
    }
}
