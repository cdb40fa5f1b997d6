//! Progress tracking and cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::calculator::MultiplesError;

/// Progress update sent from the fan-in stage to observers.
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    /// Name of the algorithm producing this update.
    pub algorithm: &'static str,
    /// Current progress as a fraction in [0.0, 1.0].
    pub progress: f64,
    /// Number of partial sums combined so far.
    pub completed: u64,
    /// Number of partial sums expected.
    pub expected: u64,
    /// Whether this is the final update.
    pub done: bool,
}

impl ProgressUpdate {
    /// Create a new progress update.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(algorithm: &'static str, completed: u64, expected: u64) -> Self {
        let progress = if expected == 0 {
            1.0
        } else {
            completed as f64 / expected as f64
        };
        Self {
            algorithm,
            progress,
            completed,
            expected,
            done: false,
        }
    }

    /// Create a completion update.
    #[must_use]
    pub fn done(algorithm: &'static str, expected: u64) -> Self {
        Self {
            algorithm,
            progress: 1.0,
            completed: expected,
            expected,
            done: true,
        }
    }
}

/// Cooperative cancellation token using atomic flags.
///
/// A token created with [`CancellationToken::child`] observes its parent:
/// cancelling the parent cancels the child, but not the other way round.
///
/// # Example
/// ```
/// use multiples_core::progress::CancellationToken;
///
/// let token = CancellationToken::new();
/// let child = token.child();
/// assert!(!child.is_cancelled());
///
/// token.cancel();
/// assert!(child.is_cancelled());
/// assert!(child.check_cancelled().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    parent: Option<Arc<AtomicBool>>,
}

impl CancellationToken {
    /// Create a new cancellation token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            parent: None,
        }
    }

    /// Create a child token that is cancelled with this one but can also be
    /// cancelled on its own.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            parent: Some(Arc::clone(&self.cancelled)),
        }
    }

    /// Check if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
            || self
                .parent
                .as_ref()
                .is_some_and(|p| p.load(Ordering::Relaxed))
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Check for cancellation, returning an error if cancelled.
    pub fn check_cancelled(&self) -> Result<(), MultiplesError> {
        if self.is_cancelled() {
            Err(MultiplesError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
