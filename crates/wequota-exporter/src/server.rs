//! Process wiring: bind the scrape listener, then serve it alongside the
//! check loop until `shutdown` resolves.

use std::future::{Future, IntoFuture};
use std::net::SocketAddr;

use tokio::net::TcpListener;

use wequota_core::error::{QuotaError, Result};

use crate::{app_state::AppState, config::ExporterConfig, router, scheduler};

/// Bind the metrics listener. Failure here is fatal for the process.
pub async fn bind(listen: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(listen)
        .await
        .map_err(|e| QuotaError::Bind(format!("failed to bind {listen}: {e}")))
}

pub async fn run<S>(cfg: ExporterConfig, shutdown: S) -> Result<()>
where
    S: Future<Output = ()> + Send + 'static,
{
    let listen = cfg.listen_addr()?;
    let state = AppState::new(&cfg)?;
    let checker = state.checker();

    let listener = bind(listen).await?;
    tracing::info!(%listen, "Starting Prometheus metrics server");

    let server = axum::serve(listener, router::build_router(state))
        .with_graceful_shutdown(shutdown)
        .into_future();

    tokio::select! {
        res = server => res.map_err(|e| QuotaError::Internal(format!("metrics server failed: {e}"))),
        _ = scheduler::run(cfg.interval, checker.as_ref()) => Ok(()),
    }
}
