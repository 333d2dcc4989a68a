//! # sc-bridge-domain
//!
//! Pure domain model for the sc-bridge HTTP-to-knowledge-base bridge.
//!
//! ## Responsibilities
//! - Define **Queries** (tagged actions received from callers: `ask`, …)
//! - Define **Questions** and **Answers** exchanged with the knowledge base
//! - Define **Temperature settings** (device state changes)
//! - Define the error taxonomy shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod device;
pub mod query;
