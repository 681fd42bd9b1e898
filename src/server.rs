//! HTTP server initialization and runtime setup.
//!
//! Handles sink selection, worker spawning, and Axum server lifecycle.

use crate::config::Config;
use crate::domain::inquiry_worker::{drain_inquiry_worker, run_inquiry_worker};
use crate::infrastructure::sinks::{InquirySink, JsonlInquirySink, LogInquirySink};
use crate::routes::app_router;
use crate::application::services::ContactService;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// How long shutdown waits for queued inquiries to be delivered.
const INQUIRY_DRAIN_GRACE: Duration = Duration::from_secs(10);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Inquiry sink (JSON-lines file or log)
/// - Background inquiry worker
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// After the server stops, waits for the worker to deliver whatever is
/// still queued before returning.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let sink: Arc<dyn InquirySink> = match &config.inquiry_log_path {
        Some(path) => {
            tracing::info!("Inquiries will be appended to {}", path);
            Arc::new(JsonlInquirySink::new(path))
        }
        None => {
            tracing::info!("Inquiries will be written to the log");
            Arc::new(LogInquirySink::new())
        }
    };

    let (inquiry_tx, inquiry_rx) = mpsc::channel(config.inquiry_queue_capacity);
    let worker = tokio::spawn(run_inquiry_worker(
        inquiry_rx,
        sink,
        config.inquiry_max_retries,
    ));

    let contact_service = Arc::new(ContactService::new(inquiry_tx));
    let state = AppState::new(contact_service, config.default_theme());

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped, draining inquiry queue");

    // serve() owned the router, so the last sender is gone by now
    if drain_inquiry_worker(worker, INQUIRY_DRAIN_GRACE).await {
        tracing::info!("Inquiry queue drained");
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
