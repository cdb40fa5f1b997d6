//! Router construction.

use std::sync::Arc;

use axum::routing::post;
use axum::Router;

use multiples_core::options::Options;
use multiples_core::registry::DefaultFactory;

use crate::handlers::{calculate_concurrent, calculate_one_loop, AppState};

/// Build the REST router with the default calculator factory.
pub fn router(options: Options) -> Router {
    router_with_state(AppState::new(Arc::new(DefaultFactory::new()), options))
}

/// Build the REST router around an explicit state.
pub fn router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/calculate-one-loop", post(calculate_one_loop))
        .route("/calculate-concurrent", post(calculate_concurrent))
        .with_state(state)
}
