// src/routes/health.rs
//! Liveness endpoint for the Kenya Farm IoT API.
//!
//! This module defines the `/health` route polled by container orchestrators
//! (e.g., Docker, Kubernetes) to decide whether an instance stays in service.
//! It follows the Explicit Module Boundary Pattern (EMBP):
//! - Internal to this file: the endpoint handler
//! - Exports to the gateway (`mod.rs`): a subrouter containing the `/health` route

use axum::{routing::get, Json, Router};

use crate::HealthStatus;

/// Handle `GET /health`.
///
/// Always answers `{"status":"healthy"}`; touches no external services.
async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}

/// Create a subrouter containing the `/health` route.
///
/// Generic over the application state so it merges cleanly with the gateway
/// router regardless of the state type.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}
