//! # multiples-core
//!
//! Sums every value below a bound that is divisible by one of a set of
//! multiples. Two algorithms are provided: a sequential one-loop scanner and
//! a concurrent aggregator that fans out one worker per multiple and fans
//! the partial sums back in.

pub mod aggregator;
pub mod calculator;
pub mod constants;
pub mod observer;
pub mod observers;
pub mod options;
pub mod progress;
pub mod registry;
pub mod request;
pub mod scanner;
pub mod worker;

// Re-exports
pub use calculator::{Calculator, ConcurrentCalculator, MultiplesError, OneLoopCalculator};
pub use constants::exit_codes;
pub use observer::ProgressObserver;
pub use options::Options;
pub use progress::{CancellationToken, ProgressUpdate};
pub use registry::{CalculatorFactory, DefaultFactory};
pub use request::{MultiplesReply, MultiplesRequest};
pub use worker::{sum_multiple, SumStrategy};

/// Sum of multiples computed by the concurrent aggregator with default options.
///
/// # Example
/// ```
/// assert_eq!(multiples_core::calculate_concurrent(20, &[3]), Ok(63));
/// assert_eq!(multiples_core::calculate_concurrent(10, &[]), Ok(0));
/// ```
pub fn calculate_concurrent(total: u64, multiples: &[u32]) -> Result<u64, MultiplesError> {
    aggregator::aggregate(
        total,
        multiples,
        &Options::default(),
        &CancellationToken::new(),
        &observers::NoOpObserver::new(),
    )
}

/// Sum of multiples computed by the sequential scanner.
///
/// # Example
/// ```
/// assert_eq!(multiples_core::calculate_one_loop(20, &[3]), Ok(63));
/// assert_eq!(multiples_core::calculate_one_loop(10, &[]), Ok(0));
/// ```
pub fn calculate_one_loop(total: u64, multiples: &[u32]) -> Result<u64, MultiplesError> {
    scanner::scan(total, multiples)
}
