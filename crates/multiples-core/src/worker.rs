//! Per-multiple summation worker.
//!
//! A worker sums the arithmetic sequence `m, 2m, 3m, ...` up to and
//! including `total`. Note the inclusive bound: the one-loop scanner stops
//! before `total`, so the two algorithms differ whenever a multiple divides
//! `total` exactly.

use crate::calculator::MultiplesError;
use crate::constants::CANCEL_CHECK_INTERVAL;
use crate::progress::CancellationToken;

/// How a worker computes its partial sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SumStrategy {
    /// Step through every multiple and accumulate.
    #[default]
    Iterative,
    /// `m * k * (k + 1) / 2` with `k = total / m`.
    ClosedForm,
}

/// Sum every multiple of `multiple` in `[multiple, total]`.
///
/// # Example
/// ```
/// assert_eq!(multiples_core::worker::sum_multiple(3, 20), Ok(63));
/// assert_eq!(multiples_core::worker::sum_multiple(30, 20), Ok(0));
/// ```
pub fn sum_multiple(multiple: u32, total: u64) -> Result<u64, MultiplesError> {
    sum_multiple_with(multiple, total, SumStrategy::Iterative, &CancellationToken::new())
}

/// Sum every multiple of `multiple` in `[multiple, total]` using `strategy`.
pub fn sum_multiple_with(
    multiple: u32,
    total: u64,
    strategy: SumStrategy,
    cancel: &CancellationToken,
) -> Result<u64, MultiplesError> {
    if multiple == 0 {
        return Err(MultiplesError::InvalidArgument(
            "multiple must be greater than 0".into(),
        ));
    }
    match strategy {
        SumStrategy::Iterative => sum_iterative(u64::from(multiple), total, cancel),
        SumStrategy::ClosedForm => sum_closed_form(u64::from(multiple), total),
    }
}

fn sum_iterative(step: u64, total: u64, cancel: &CancellationToken) -> Result<u64, MultiplesError> {
    let mut sum = 0u64;
    let mut value = step;
    let mut iterations = 0u64;

    while value <= total {
        sum = sum.checked_add(value).ok_or(MultiplesError::Overflow)?;

        iterations += 1;
        if iterations % CANCEL_CHECK_INTERVAL == 0 {
            cancel.check_cancelled()?;
        }

        value = match value.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(sum)
}

fn sum_closed_form(step: u64, total: u64) -> Result<u64, MultiplesError> {
    let k = u128::from(total / step);
    // k * (k + 1) fits in u128 for any k <= u64::MAX.
    let triangle = k * (k + 1) / 2;
    let sum = triangle
        .checked_mul(u128::from(step))
        .ok_or(MultiplesError::Overflow)?;
    u64::try_from(sum).map_err(|_| MultiplesError::Overflow)
}
