//! Axum router assembly.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use sc_bridge_app::ports::KnowledgeBase;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the bridge API under `/sc` and mounts the Alice webhook at `/alice`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<K>(state: AppState<K>) -> Router
where
    K: KnowledgeBase + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/health/sc", get(sc_health::<K>))
        .nest("/sc", crate::api::routes())
        .route("/alice", post(crate::alice::handle::<K>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[derive(Serialize)]
struct ScHealth {
    status: &'static str,
}

async fn sc_health<K>(State(state): State<AppState<K>>) -> impl IntoResponse
where
    K: KnowledgeBase + Send + Sync + 'static,
{
    match state.knowledge_base.ping().await {
        Ok(()) => (StatusCode::OK, Json(ScHealth { status: "ok" })),
        Err(err) => {
            tracing::warn!(error = %err, "sc-server healthcheck failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ScHealth {
                    status: "unreachable",
                }),
            )
        }
    }
}
