//! Constants shared by the algorithms and the front-ends.

/// Number of loop iterations between two cancellation checks.
pub const CANCEL_CHECK_INTERVAL: u64 = 1 << 16;

/// Minimum progress change (1%) before an observer logs an update.
pub const PROGRESS_REPORT_THRESHOLD: f64 = 0.01;

/// Default REST listening port.
pub const DEFAULT_REST_PORT: u16 = 8080;

/// Prefix used for worker thread names.
pub const WORKER_THREAD_PREFIX: &str = "multiples-worker";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The computation deadline elapsed.
    pub const ERROR_TIMEOUT: i32 = 2;
    /// Invalid argument or configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Computation cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
