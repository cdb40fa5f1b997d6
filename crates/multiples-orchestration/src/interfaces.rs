//! Orchestration interfaces.

use std::time::Duration;

use multiples_core::calculator::MultiplesError;
use multiples_core::request::MultiplesRequest;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a calculation result.
    fn present_result(
        &self,
        algorithm: &str,
        request: &MultiplesRequest,
        result: u64,
        duration: Duration,
    );

    /// Present a comparison of several calculators.
    fn present_comparison(&self, results: &[CalculationResult]);

    /// Present an error.
    fn present_error(&self, algorithm: &str, error: &MultiplesError);
}

/// Result of a single calculation.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Algorithm name.
    pub algorithm: String,
    /// The computed sum or a structured error.
    pub outcome: Result<u64, MultiplesError>,
    /// Computation duration.
    pub duration: Duration,
}
