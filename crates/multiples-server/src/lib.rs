//! # multiples-server
//!
//! REST front-end: `POST /calculate-one-loop` and `POST /calculate-concurrent`
//! accept `{ "total": u64, "multiples": [u32] }` and answer `{ "total": u64 }`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

use std::future::Future;

use anyhow::{Context, Result};
use tracing::info;

pub use config::ServerConfig;
pub use routes::router;

/// Serve until Ctrl+C is received.
pub async fn serve(config: ServerConfig) -> Result<()> {
    serve_with_shutdown(config, shutdown_signal()).await
}

/// Serve until `shutdown` completes, then drain in-flight requests.
pub async fn serve_with_shutdown<F>(config: ServerConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("REST port failed to listen on {addr}"))?;
    info!(addr = %listener.local_addr()?, "rest server listening");

    axum::serve(listener, router(config.options))
        .with_graceful_shutdown(shutdown)
        .await
        .context("REST server failed")?;

    info!("rest server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available: run until the process is killed.
        std::future::pending::<()>().await;
    }
}
