//! Mapping of calculation failures onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use multiples_core::calculator::MultiplesError;

/// JSON body returned with every error status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error returned by the REST handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Calculation(#[from] MultiplesError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Calculation(err) => match err.root_cause() {
                MultiplesError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
                MultiplesError::Overflow => StatusCode::UNPROCESSABLE_ENTITY,
                MultiplesError::DeadlineExceeded(_) => StatusCode::GATEWAY_TIMEOUT,
                MultiplesError::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
                MultiplesError::WorkerFailure { .. }
                | MultiplesError::Disconnected
                | MultiplesError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
