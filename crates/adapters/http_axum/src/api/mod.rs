//! JSON bridge API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod query;

use axum::Router;
use axum::routing::post;
use serde::Serialize;

use sc_bridge_app::ports::KnowledgeBase;

use crate::state::AppState;

/// `{ "text": … }` body shared by successful bridge responses.
#[derive(Debug, Serialize)]
pub struct TextBody {
    pub text: String,
}

/// Build the `/sc` sub-router.
pub fn routes<K>() -> Router<AppState<K>>
where
    K: KnowledgeBase + Send + Sync + 'static,
{
    Router::new()
        .route("/query", post(query::handle::<K>))
        .route(
            "/devices/{device}/temperature",
            post(devices::set_temperature::<K>),
        )
}
