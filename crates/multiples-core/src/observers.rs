//! Concrete observer implementations.

use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_channel::Sender;
use tracing::{debug, info};

use crate::constants::PROGRESS_REPORT_THRESHOLD;
use crate::observer::ProgressObserver;
use crate::progress::ProgressUpdate;

/// Observer that sends updates through a channel (non-blocking).
pub struct ChannelObserver {
    sender: Sender<ProgressUpdate>,
}

impl ChannelObserver {
    /// Create a new channel observer.
    #[must_use]
    pub fn new(sender: Sender<ProgressUpdate>) -> Self {
        Self { sender }
    }
}

impl ProgressObserver for ChannelObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        // Dropped when the receiver is full or gone.
        let _ = self.sender.try_send(update.clone());
    }
}

/// Observer that logs progress updates through `tracing`.
pub struct LoggingObserver {
    last_reported: AtomicU64,
}

impl LoggingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_reported: AtomicU64::new(0),
        }
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for LoggingObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        if update.done {
            info!(
                algorithm = %update.algorithm,
                partial_sums = update.expected,
                "Calculation complete"
            );
            self.last_reported.store(0f64.to_bits(), Ordering::Relaxed);
            return;
        }

        let last = f64::from_bits(self.last_reported.load(Ordering::Relaxed));
        if (update.progress - last) >= PROGRESS_REPORT_THRESHOLD {
            debug!(
                algorithm = %update.algorithm,
                progress = format!("{:.1}%", update.progress * 100.0),
                completed = update.completed,
                expected = update.expected,
                "Progress update"
            );
            self.last_reported
                .store(update.progress.to_bits(), Ordering::Relaxed);
        }
    }
}

/// Null object pattern: discards every update.
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for NoOpObserver {
    fn on_progress(&self, _update: &ProgressUpdate) {}
}
