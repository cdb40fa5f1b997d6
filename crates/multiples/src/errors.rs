//! Error handling and exit codes.

use multiples_core::calculator::MultiplesError;
use multiples_core::constants::exit_codes;

/// Map a calculation error to its process exit code.
#[must_use]
pub fn handle_error(err: &MultiplesError) -> i32 {
    match err.root_cause() {
        MultiplesError::InvalidArgument(_) | MultiplesError::Config(_) => exit_codes::ERROR_CONFIG,
        MultiplesError::DeadlineExceeded(_) => exit_codes::ERROR_TIMEOUT,
        MultiplesError::Cancelled => exit_codes::ERROR_CANCELED,
        MultiplesError::Overflow
        | MultiplesError::Disconnected
        | MultiplesError::WorkerFailure { .. } => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for an application error, looking through `anyhow` context.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let code = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<MultiplesError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error);
    u8::try_from(code).unwrap_or(1)
}
