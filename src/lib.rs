//! Kenya Farm IoT API service.
//!
//! Exposes a root status message and a liveness probe over HTTP. The binary in
//! `main.rs` wires these modules together:
//! - `config` loads runtime settings from the environment
//! - `routes` is the gateway that builds the full axum router (EMBP pattern)
//! - `server` binds, serves and drains on shutdown

pub mod config;
pub mod models;
pub mod routes;
pub mod server;

pub use config::Config;

// Re-exported so routes/*.rs only depend on their parent gateway, not on
// models.rs directly.
pub use models::{HealthStatus, RootStatus, ServiceInfo};
