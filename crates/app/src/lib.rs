//! # sc-bridge-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **driven/outbound ports** that adapters must implement:
//!   - `ScConnection` — request/response session with the sc-server
//! - Define **driving/inbound ports** used by the HTTP layer:
//!   - `KnowledgeBase` — answer questions, apply device state changes
//! - Provide the default command layer (`ScCommands`) that implements
//!   `KnowledgeBase` on top of an injected `ScConnection`
//!
//! ## Dependency rule
//! Depends on `sc-bridge-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
