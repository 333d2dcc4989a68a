//! Startup sequence of the sc-bridged daemon.
//!
//! The sc-server session is opened first; the HTTP listener is bound only
//! once it is up, so a bridge that cannot reach the knowledge base never
//! accepts requests.

pub mod config;

use std::future::Future;

use sc_bridge_adapter_http_axum::state::AppState;
use sc_bridge_adapter_sc_ws::{ScClient, ScError, ScEvent};
use sc_bridge_app::services::commands::ScCommands;
use tokio::sync::broadcast;

use crate::config::Config;

/// Failure that stops the daemon.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The sc-server session could not be opened.
    #[error("failed to connect to sc-server")]
    Sc(#[from] ScError),
    /// Binding or serving the HTTP listener failed.
    #[error("http server failed")]
    Io(#[from] std::io::Error),
}

/// Connect to the sc-server, then bind and serve HTTP until `shutdown`
/// resolves.
///
/// # Errors
///
/// Returns [`RunError::Sc`] when the sc-server is unreachable, in which case
/// nothing is bound, or [`RunError::Io`] when the listener fails.
pub async fn run<F>(config: Config, shutdown: F) -> Result<(), RunError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let client = ScClient::new(config.sc.clone());
    tokio::spawn(log_events(client.subscribe()));
    client.connect().await?;

    let state = AppState::new(ScCommands::new(client));
    let app = sc_bridge_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "sc-bridged listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("sc-bridged stopped");
    Ok(())
}

async fn log_events(mut events: broadcast::Receiver<ScEvent>) {
    loop {
        match events.recv().await {
            Ok(event) => tracing::debug!(id = event.id, payload = %event.payload, "sc event"),
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "sc event log lagging");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
