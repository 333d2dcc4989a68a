//! sc-server adapter error types.

use sc_bridge_domain::error::BridgeError;

/// Errors specific to the sc-server WebSocket client.
#[derive(Debug, thiserror::Error)]
pub enum ScError {
    /// `execute` was called before `connect`.
    #[error("sc-server client not connected")]
    NotConnected,

    /// `connect` was called on a client that already has a session.
    #[error("sc-server client already connected")]
    AlreadyConnected,

    /// The WebSocket transport failed.
    #[error("sc-server transport error")]
    Transport(#[source] tokio_tungstenite::tungstenite::Error),

    /// A frame could not be encoded.
    #[error("failed to encode sc-server frame")]
    Codec(#[source] serde_json::Error),

    /// The session ended before a response arrived.
    #[error("sc-server connection closed")]
    ConnectionClosed,

    /// The server answered with `status: false`.
    #[error("sc-server rejected the request: {0}")]
    Rejected(serde_json::Value),
}

impl From<ScError> for BridgeError {
    fn from(err: ScError) -> Self {
        Self::Remote(Box::new(err))
    }
}
