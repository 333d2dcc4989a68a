//! # sc-bridge-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **bridge API** under `/sc` (`POST /sc/query`,
//!   `POST /sc/devices/{device}/temperature`)
//! - Serve the **Yandex Alice webhook** at `POST /alice`
//! - Serve liveness (`/health`) and sc-server reachability (`/health/sc`)
//! - Parse loosely typed request bodies into validated domain values before
//!   dispatching to the knowledge base (driving adapter)
//! - Map results and errors into JSON responses
//!
//! ## Dependency rule
//! Depends on `sc-bridge-app` (for port traits) and `sc-bridge-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod alice;
pub mod api;
pub mod error;
pub mod router;
pub mod state;
