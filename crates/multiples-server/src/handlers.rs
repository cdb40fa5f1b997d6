//! REST handlers for the two calculation endpoints.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::Json;
use tracing::{info, warn};

use multiples_core::observers::LoggingObserver;
use multiples_core::options::Options;
use multiples_core::progress::CancellationToken;
use multiples_core::registry::CalculatorFactory;
use multiples_core::request::{MultiplesReply, MultiplesRequest};

use crate::error::ApiError;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    factory: Arc<dyn CalculatorFactory>,
    options: Options,
}

impl AppState {
    #[must_use]
    pub fn new(factory: Arc<dyn CalculatorFactory>, options: Options) -> Self {
        Self { factory, options }
    }
}

/// Cancels the calculation when the request future is dropped (client gone).
struct CancelOnDrop(CancellationToken);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.cancel();
    }
}

/// Handler for POST /calculate-one-loop
pub async fn calculate_one_loop(
    State(state): State<AppState>,
    Json(request): Json<MultiplesRequest>,
) -> Result<Json<MultiplesReply>, ApiError> {
    run_calculation(&state, "one-loop", request).await
}

/// Handler for POST /calculate-concurrent
pub async fn calculate_concurrent(
    State(state): State<AppState>,
    Json(request): Json<MultiplesRequest>,
) -> Result<Json<MultiplesReply>, ApiError> {
    run_calculation(&state, "concurrent", request).await
}

async fn run_calculation(
    state: &AppState,
    algo: &str,
    request: MultiplesRequest,
) -> Result<Json<MultiplesReply>, ApiError> {
    let calc = state.factory.get(algo)?;
    let algorithm = calc.name();
    let opts = state.options.clone();
    let cancel = CancellationToken::new();
    let _guard = CancelOnDrop(cancel.clone());

    let start = Instant::now();
    info!(
        algorithm,
        total = request.total,
        multiples = request.multiples.len(),
        "received calculate multiples request"
    );

    let outcome = tokio::task::spawn_blocking(move || {
        calc.calculate(&cancel, &LoggingObserver::new(), &request, &opts)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("calculation task failed: {e}")))?;

    let elapsed = start.elapsed();
    match outcome {
        Ok(total) => {
            info!(algorithm, total, ?elapsed, "total answer computed");
            Ok(Json(MultiplesReply::from(total)))
        }
        Err(e) => {
            warn!(algorithm, error = %e, ?elapsed, "calculation failed");
            Err(e.into())
        }
    }
}
