//! Port definitions — traits that adapters implement or drive.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod knowledge_base;
pub mod sc_connection;

pub use knowledge_base::KnowledgeBase;
pub use sc_connection::{ScConnection, ScRequest, ScResponse};
