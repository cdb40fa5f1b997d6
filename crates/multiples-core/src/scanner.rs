//! Sequential one-loop scanner.
//!
//! Walks `[1, total)` once and adds `i` for every multiple that divides it.
//! A value divisible by several multiples is added once per match.

use std::time::{Duration, Instant};

use crate::calculator::MultiplesError;
use crate::constants::CANCEL_CHECK_INTERVAL;
use crate::progress::CancellationToken;

/// Scan `[1, total)` and sum every value divisible by a multiple, per match.
///
/// # Example
/// ```
/// // 3 + 5 + 6 + 9
/// assert_eq!(multiples_core::scanner::scan(10, &[3, 5]), Ok(23));
/// // 15 is counted for both 3 and 5
/// assert_eq!(multiples_core::scanner::scan(16, &[3, 5]), Ok(75));
/// ```
pub fn scan(total: u64, multiples: &[u32]) -> Result<u64, MultiplesError> {
    scan_with_cancel(total, multiples, &CancellationToken::new())
}

/// Like [`scan`], polling `cancel` periodically.
pub fn scan_with_cancel(
    total: u64,
    multiples: &[u32],
    cancel: &CancellationToken,
) -> Result<u64, MultiplesError> {
    scan_with_deadline(total, multiples, cancel, None)
}

/// Like [`scan_with_cancel`], also failing with
/// [`MultiplesError::DeadlineExceeded`] once `deadline` has elapsed.
pub fn scan_with_deadline(
    total: u64,
    multiples: &[u32],
    cancel: &CancellationToken,
    deadline: Option<Duration>,
) -> Result<u64, MultiplesError> {
    if let Some(index) = multiples.iter().position(|&m| m == 0) {
        return Err(MultiplesError::zero_multiple(index));
    }
    if multiples.is_empty() {
        return Ok(0);
    }

    let expires = deadline.map(|limit| (limit, Instant::now() + limit));
    let mut sum = 0u64;
    for i in 1..total {
        if i % CANCEL_CHECK_INTERVAL == 0 {
            cancel.check_cancelled()?;
            if let Some((limit, at)) = expires {
                if Instant::now() >= at {
                    return Err(MultiplesError::DeadlineExceeded(limit));
                }
            }
        }
        for &m in multiples {
            if i % u64::from(m) == 0 {
                sum = sum.checked_add(i).ok_or(MultiplesError::Overflow)?;
            }
        }
    }

    Ok(sum)
}
