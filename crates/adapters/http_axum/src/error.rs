//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use sc_bridge_domain::error::{BridgeError, ValidationError};

/// Message returned for every unexpected failure; the cause stays in the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "sc error";

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps bridge failures to an HTTP response with appropriate status code.
pub enum ApiError {
    /// Error raised by the domain or the knowledge base.
    Bridge(BridgeError),
    /// The request body could not be read as JSON.
    InvalidBody(JsonRejection),
}

impl From<BridgeError> for ApiError {
    fn from(err: BridgeError) -> Self {
        Self::Bridge(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Bridge(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Bridge(BridgeError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Bridge(BridgeError::Remote(err)) => {
                tracing::error!(error = %err, "sc error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            Self::InvalidBody(rejection) => {
                tracing::debug!(error = %rejection, "rejected request body");
                (
                    StatusCode::BAD_REQUEST,
                    "invalid request body".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
