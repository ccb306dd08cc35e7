// src/routes/root.rs
//! Service identity endpoint for the Kenya Farm IoT API.
//!
//! This module defines the `/` route, which tells callers which API they
//! reached and that it is running. It follows the Explicit Module Boundary
//! Pattern (EMBP):
//! - Internal to this file: the endpoint handler
//! - Exports to the gateway (`mod.rs`): a subrouter containing the `/` route

use axum::{routing::get, Json, Router};

use crate::RootStatus;

/// Handle `GET /`.
///
/// Always answers `{"message":"Kenya Farm IoT API","status":"running"}`.
async fn root() -> Json<RootStatus> {
    Json(RootStatus::running())
}

/// Create a subrouter containing the `/` route.
///
/// # Type Parameters
/// - `S`: Application state type shared by all routes in the gateway.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(root))
}
