//! Shared application state for axum handlers.

use std::sync::Arc;

use sc_bridge_app::ports::KnowledgeBase;

/// Application state shared across all axum handlers.
///
/// Generic over the knowledge-base implementation to avoid dynamic dispatch.
/// `Clone` is implemented manually so `K` itself does not need to be
/// `Clone`; only the `Arc` is cloned.
pub struct AppState<K> {
    /// Command layer the handlers dispatch to.
    pub knowledge_base: Arc<K>,
}

impl<K> Clone for AppState<K> {
    fn clone(&self) -> Self {
        Self {
            knowledge_base: Arc::clone(&self.knowledge_base),
        }
    }
}

impl<K> AppState<K>
where
    K: KnowledgeBase + Send + Sync + 'static,
{
    /// Create a new application state owning the knowledge base.
    pub fn new(knowledge_base: K) -> Self {
        Self {
            knowledge_base: Arc::new(knowledge_base),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc`.
    ///
    /// Use this when the knowledge base is also shared with background tasks.
    pub fn from_arc(knowledge_base: Arc<K>) -> Self {
        Self { knowledge_base }
    }
}
