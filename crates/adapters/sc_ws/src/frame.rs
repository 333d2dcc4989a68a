//! JSON frames exchanged with the sc-server.
//!
//! Requests carry a client-allocated `id`; the server echoes it on the
//! matching response. Frames with `event: true` are server pushes and are
//! not tied to a pending request.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct RequestFrame<'a> {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub payload: &'a serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseFrame {
    pub id: u64,
    #[serde(default = "default_status")]
    pub status: bool,
    #[serde(default)]
    pub event: bool,
    #[serde(default)]
    pub payload: serde_json::Value,
}

fn default_status() -> bool {
    true
}

/// A frame pushed by the sc-server outside of any request.
#[derive(Debug, Clone, PartialEq)]
pub struct ScEvent {
    /// Subscription id assigned by the server.
    pub id: u64,
    pub payload: serde_json::Value,
}
