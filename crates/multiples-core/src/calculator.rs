//! Calculator trait, error type, and the two calculator implementations.
//!
//! `Calculator` is the public trait consumed by orchestration and the
//! front-ends. `OneLoopCalculator` wraps the sequential scanner and
//! `ConcurrentCalculator` wraps the fan-out/fan-in aggregator.

use std::time::Duration;

use tracing::debug;

use crate::aggregator;
use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::progress::{CancellationToken, ProgressUpdate};
use crate::request::MultiplesRequest;
use crate::scanner;

/// Error type for multiples calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MultiplesError {
    /// A supplied value cannot be computed with (e.g. a multiple of 0).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A per-multiple worker failed; the whole computation fails with it.
    #[error("worker {index} (multiple {multiple}) failed: {source}")]
    WorkerFailure {
        index: usize,
        multiple: u32,
        #[source]
        source: Box<MultiplesError>,
    },

    /// The deadline elapsed before all workers completed.
    #[error("deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),

    /// Calculation was cancelled.
    #[error("calculation cancelled")]
    Cancelled,

    /// A worker exited without reporting a partial sum.
    #[error("worker exited without reporting a result")]
    Disconnected,

    /// The result does not fit in 64 bits.
    #[error("result overflows u64")]
    Overflow,

    /// Configuration or resource error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl MultiplesError {
    /// Unwrap nested worker failures down to the error that caused them.
    #[must_use]
    pub fn root_cause(&self) -> &MultiplesError {
        match self {
            Self::WorkerFailure { source, .. } => source.root_cause(),
            other => other,
        }
    }

    pub(crate) fn zero_multiple(index: usize) -> Self {
        Self::InvalidArgument(format!("multiple at position {index} is 0"))
    }
}

/// Public trait for multiples calculators.
pub trait Calculator: Send + Sync {
    /// Compute the sum of multiples for the given request.
    fn calculate(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        request: &MultiplesRequest,
        opts: &Options,
    ) -> Result<u64, MultiplesError>;

    /// Get the name of this calculator.
    fn name(&self) -> &'static str;
}

/// Single-threaded scan of `[1, total)` against every multiple.
#[derive(Debug, Default, Clone, Copy)]
pub struct OneLoopCalculator;

impl OneLoopCalculator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for OneLoopCalculator {
    fn calculate(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        request: &MultiplesRequest,
        opts: &Options,
    ) -> Result<u64, MultiplesError> {
        debug!(total = request.total, multiples = ?request.multiples, "scanning in one loop");
        let sum =
            scanner::scan_with_deadline(request.total, &request.multiples, cancel, opts.deadline)?;
        observer.on_progress(&ProgressUpdate::done(self.name(), 1));
        Ok(sum)
    }

    fn name(&self) -> &'static str {
        "OneLoop"
    }
}

/// One worker per multiple, combined by the fan-in stage.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcurrentCalculator;

impl ConcurrentCalculator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for ConcurrentCalculator {
    fn calculate(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        request: &MultiplesRequest,
        opts: &Options,
    ) -> Result<u64, MultiplesError> {
        aggregator::aggregate(request.total, &request.multiples, opts, cancel, observer)
    }

    fn name(&self) -> &'static str {
        aggregator::ALGORITHM
    }
}
