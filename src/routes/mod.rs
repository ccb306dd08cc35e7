use axum::Router;
use tower_http::trace::TraceLayer;

mod health;
mod root;

// ---

/// Build the complete API router.
///
/// Unknown paths fall through to axum's default 404 and unsupported methods
/// on known paths get its default 405.
pub fn router() -> Router {
    // ---
    Router::new()
        .merge(root::router())
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
}
