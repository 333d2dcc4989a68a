//! Knowledge-base port — the capabilities the HTTP layer drives.
//!
//! This is the extension point for real sc-operations: the default
//! implementation ([`ScCommands`](crate::services::commands::ScCommands))
//! only echoes and logs.

use std::future::Future;

use sc_bridge_domain::device::TemperatureSetting;
use sc_bridge_domain::error::BridgeError;
use sc_bridge_domain::query::{Answer, Question};

/// Operations the bridge can perform against the knowledge base.
pub trait KnowledgeBase {
    /// Answer a free-text question.
    fn ask_question(
        &self,
        question: Question,
    ) -> impl Future<Output = Result<Answer, BridgeError>> + Send;

    /// Apply a device temperature change.
    fn set_temperature(
        &self,
        setting: TemperatureSetting,
    ) -> impl Future<Output = Result<(), BridgeError>> + Send;

    /// Check that the knowledge base is reachable.
    fn ping(&self) -> impl Future<Output = Result<(), BridgeError>> + Send;
}
