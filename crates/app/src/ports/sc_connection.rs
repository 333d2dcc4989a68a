//! sc-server connection port — one request, one response.

use std::future::Future;

use serde::{Deserialize, Serialize};

use sc_bridge_domain::error::BridgeError;

/// Request type understood by the sc-server for liveness checks.
pub const HEALTHCHECK: &str = "healthcheck";

/// A request sent to the sc-server.
///
/// `kind` is the protocol-level request type; `payload` is passed through
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub payload: serde_json::Value,
}

impl ScRequest {
    #[must_use]
    pub fn new(kind: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// A liveness probe with an empty payload.
    #[must_use]
    pub fn healthcheck() -> Self {
        Self::new(HEALTHCHECK, serde_json::Value::Null)
    }
}

/// A successful reply from the sc-server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScResponse {
    pub payload: serde_json::Value,
}

/// An established session with the sc-server.
///
/// Implementations must be usable concurrently through `&self`.
pub trait ScConnection {
    /// Send `request` and wait for the matching response.
    fn execute(
        &self,
        request: ScRequest,
    ) -> impl Future<Output = Result<ScResponse, BridgeError>> + Send;
}
