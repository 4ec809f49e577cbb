use std::{net::SocketAddr, path::Path, time::Duration};

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::post,
};
use axum_server::{Handle, tls_rustls::RustlsConfig};
use kube::core::{
    conversion::{ConversionResponse, ConversionReview},
    response::Status,
};

use crate::{Error, Result, conversion_webhook, http_server::shutdown_signal, metrics::Metrics};

/// Serves the conversion webhook over TLS until a shutdown signal is
/// received.
///
/// # Errors
///
/// Will return `Err` if the certificate or key could not be loaded, or the
/// address could not be bound.
pub async fn run(addr: SocketAddr, cert: &Path, key: &Path, metrics: Metrics) -> Result<()> {
    let config = tls_config(cert, key).await?;

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    tracing::info!(addr =% addr, "https server started");

    axum_server::bind_rustls(addr, config)
        .handle(handle)
        .serve(router(metrics).into_make_service())
        .await
        .map_err(Error::Io)?;

    tracing::info!("https server stopped");

    Ok(())
}

/// Installs `aws-lc-rs` as the process wide crypto provider. rustls cannot
/// choose one on its own while `ring` is compiled in as well.
pub fn install_crypto_provider() {
    if rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .is_err()
    {
        tracing::debug!("crypto provider already installed");
    }
}

async fn tls_config(cert: &Path, key: &Path) -> Result<RustlsConfig> {
    install_crypto_provider();
    RustlsConfig::from_pem_file(cert, key)
        .await
        .map_err(Error::Io)
}

async fn graceful_shutdown(handle: Handle) {
    shutdown_signal().await;
    handle.graceful_shutdown(Some(Duration::from_secs(10)));
}

fn router(metrics: Metrics) -> Router {
    Router::new()
        .route("/convert", post(handler))
        .with_state(metrics)
}

#[allow(clippy::unused_async)]
async fn handler(
    State(metrics): State<Metrics>,
    review: Result<Json<ConversionReview>, JsonRejection>,
) -> (StatusCode, Json<ConversionReview>) {
    match review {
        Ok(Json(review)) => (
            StatusCode::OK,
            Json(conversion_webhook::review(&metrics, review)),
        ),
        Err(rejection) => {
            tracing::warn!(rejection =? rejection, "rejection");
            (
                rejection.status(),
                Json(
                    ConversionResponse::invalid(Status::failure(
                        &rejection.body_text(),
                        "InvalidRequest",
                    ))
                    .into_review(),
                ),
            )
        }
    }
}
