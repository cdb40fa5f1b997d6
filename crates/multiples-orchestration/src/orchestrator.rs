//! Core orchestration: parallel execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, warn};

use multiples_core::calculator::{Calculator, MultiplesError};
use multiples_core::observer::ProgressObserver;
use multiples_core::observers::NoOpObserver;
use multiples_core::options::Options;
use multiples_core::progress::CancellationToken;
use multiples_core::request::MultiplesRequest;

use crate::interfaces::CalculationResult;

/// Execute the request with all given calculators.
pub fn execute_calculations(
    calculators: &[Arc<dyn Calculator>],
    request: &MultiplesRequest,
    opts: &Options,
    cancel: &CancellationToken,
) -> Vec<CalculationResult> {
    execute_calculations_with_observer(calculators, request, opts, cancel, &NoOpObserver::new())
}

/// Execute the request with all given calculators and a progress observer.
///
/// A single calculator runs on the calling thread; several run in parallel
/// on the rayon pool. Results keep the order of `calculators`.
pub fn execute_calculations_with_observer(
    calculators: &[Arc<dyn Calculator>],
    request: &MultiplesRequest,
    opts: &Options,
    cancel: &CancellationToken,
    observer: &dyn ProgressObserver,
) -> Vec<CalculationResult> {
    if let [calc] = calculators {
        return vec![run_one(calc.as_ref(), request, opts, cancel, observer)];
    }

    calculators
        .par_iter()
        .map(|calc| run_one(calc.as_ref(), request, opts, cancel, observer))
        .collect()
}

fn run_one(
    calc: &dyn Calculator,
    request: &MultiplesRequest,
    opts: &Options,
    cancel: &CancellationToken,
    observer: &dyn ProgressObserver,
) -> CalculationResult {
    let start = Instant::now();
    let outcome = calc.calculate(cancel, observer, request, opts);
    let duration = start.elapsed();

    match &outcome {
        Ok(total) => debug!(algorithm = calc.name(), total, ?duration, "calculation finished"),
        Err(e) => warn!(algorithm = calc.name(), error = %e, "calculation failed"),
    }

    CalculationResult {
        algorithm: calc.name().to_string(),
        outcome,
        duration,
    }
}

/// Return the first failed result, if any.
#[must_use]
pub fn first_failure(results: &[CalculationResult]) -> Option<&MultiplesError> {
    results.iter().find_map(|r| r.outcome.as_ref().err())
}
