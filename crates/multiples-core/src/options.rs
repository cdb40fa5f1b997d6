//! Calculation options and configuration.

use std::time::Duration;

use crate::worker::SumStrategy;

/// Options for a multiples calculation.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// How each worker sums its arithmetic sequence.
    pub strategy: SumStrategy,
    /// Upper bound on concurrent workers (0 = one worker per multiple).
    pub max_workers: usize,
    /// Deadline for the concurrent aggregation (`None` = wait forever).
    pub deadline: Option<Duration>,
}

impl Options {
    /// Normalize options: a zero deadline means no deadline.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.deadline.is_some_and(|d| d.is_zero()) {
            self.deadline = None;
        }
        self
    }

    /// Number of worker threads to spawn for `jobs` multiples.
    #[must_use]
    pub fn worker_count(&self, jobs: usize) -> usize {
        if self.max_workers == 0 {
            jobs
        } else {
            jobs.min(self.max_workers)
        }
    }
}
