//! JSON handlers for device state changes.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use sc_bridge_app::ports::KnowledgeBase;
use sc_bridge_domain::device::TemperatureSetting;

use crate::api::TextBody;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for setting a device temperature.
#[derive(Deserialize)]
pub struct SetTemperatureRequest {
    pub value: f64,
}

/// Possible responses from the set-temperature endpoint.
pub enum SetTemperatureResponse {
    Ok(Json<TextBody>),
}

impl IntoResponse for SetTemperatureResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /sc/devices/{device}/temperature`
pub async fn set_temperature<K>(
    State(state): State<AppState<K>>,
    Path(device): Path<String>,
    body: Result<Json<SetTemperatureRequest>, JsonRejection>,
) -> Result<SetTemperatureResponse, ApiError>
where
    K: KnowledgeBase + Send + Sync + 'static,
{
    let Json(req) = body?;
    let setting = TemperatureSetting::new(device, req.value)?;
    state.knowledge_base.set_temperature(setting).await?;
    Ok(SetTemperatureResponse::Ok(Json(TextBody {
        text: "ok".to_string(),
    })))
}
