use std::net::SocketAddr;

use axum::{Router, routing::get};
use tokio::signal;

use crate::{Error, Result};

/// Serves the liveness and readiness probes until a shutdown signal is
/// received.
///
/// # Errors
///
/// Will return `Err` if the address could not be bound.
pub async fn run(addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(Error::Io)?;

    tracing::info!(addr =% addr, "http server started");

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Error::Io)?;

    tracing::info!("http server stopped");

    Ok(())
}

fn router() -> Router {
    Router::new()
        .route("/livez", get(handler))
        .route("/readyz", get(handler))
}

#[allow(clippy::unused_async)]
async fn handler() {}

pub(crate) async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!(error =% error, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(error) => {
                tracing::error!(error =% error, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("signal received, starting graceful shutdown");
}
