//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`BridgeError`]
//! via `From`. Adapter failures are boxed into [`BridgeError::Remote`].

/// Top-level error returned by ports and application services.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The caller sent something the bridge cannot act on.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The knowledge-base server or its transport failed.
    #[error("knowledge-base error")]
    Remote(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations detected at the boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The `action` field is missing or not one the bridge knows.
    #[error("unknown action")]
    UnknownAction,

    /// A device name was empty.
    #[error("device name must not be empty")]
    EmptyDevice,

    /// A numeric value was NaN or infinite.
    #[error("value must be a finite number")]
    NonFiniteValue,
}
