//! sc-server client configuration.

use serde::Deserialize;

/// Configuration for the sc-server WebSocket client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScClientConfig {
    /// WebSocket endpoint of the sc-server JSON API.
    pub url: String,
}

impl Default for ScClientConfig {
    fn default() -> Self {
        Self {
            url: "ws://localhost:8090/ws_json".to_string(),
        }
    }
}
