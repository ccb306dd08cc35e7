//! Application entry point for the `kenya-farm-iot` API service.
//!
//! This binary orchestrates the full startup sequence:
//! - Loading configuration from environment variables or `.env`
//! - Initializing structured logging/tracing
//! - Mounting all API routes via the `routes` gateway (EMBP pattern)
//! - Binding the Axum HTTP server and serving until SIGTERM/Ctrl+C
//!
//! # Environment Variables
//! - `APP_HOST` (optional) – bind address (default: `0.0.0.0`)
//! - `APP_PORT` (optional) – bind port (default: 8080)
//! - `SHUTDOWN_GRACE_SECS` (optional) – drain window on shutdown (default: 30)
//! - `AXUM_LOG_LEVEL` (optional) – log verbosity (default: `debug`)
//! - `AXUM_SPAN_EVENTS` (optional) – span event mode for tracing
use std::env;

use anyhow::{Context, Result};
use axum::Router;
use dotenvy::dotenv;
use is_terminal::IsTerminal;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use kenya_farm_iot::{config, routes, server, Config, ServiceInfo};

// ---

#[tokio::main]
async fn main() -> Result<()> {
    // ---
    // Load .env first so it can also drive the log settings
    dotenv().ok();
    init_tracing();

    let info = ServiceInfo::current();
    tracing::info!(
        "Starting {} v{} - {}",
        info.title,
        info.version,
        info.description
    );

    let cfg: Config = config::load_from_env()?;
    cfg.log_config();

    // Build app from routes gateway (EMBP)
    let app: Router = routes::router();

    let addr = cfg.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    server::serve(listener, app, cfg.shutdown_grace, server::shutdown_signal()).await
}

// ---

/// Initialize the global tracing subscriber for structured logging.
///
/// This function configures the [`tracing_subscriber`] with:
/// - Log target, file, and line number output enabled
/// - Color output controlled by TTY detection and `FORCE_COLOR` env var:
///   - `FORCE_COLOR=1|true|yes`: force colors on
///   - `FORCE_COLOR=0|false|no`: force colors off
///   - unset or other values: auto-detect TTY
/// - Span event emission mode controlled by the `AXUM_SPAN_EVENTS` env var:
///   - `"full"`       : emit ENTER, EXIT, and CLOSE events with timing
///   - `"enter_exit"` : emit ENTER and EXIT only
///   - unset or other values: emit CLOSE events only (default)
/// - Log level controlled by `RUST_LOG`, or `AXUM_LOG_LEVEL` when it is unset;
///   the latter applies to this crate and the `tower_http` request traces
///
/// Call once at startup before any logging macros are invoked.
fn init_tracing() {
    // ---
    let span_events = match env::var("AXUM_SPAN_EVENTS").as_deref() {
        Ok("full") => FmtSpan::FULL,
        Ok("enter_exit") => FmtSpan::ENTER | FmtSpan::EXIT,
        _ => FmtSpan::CLOSE,
    };

    let use_color = match env::var("FORCE_COLOR").as_deref() {
        Ok("1") | Ok("true") | Ok("yes") => true,
        Ok("0") | Ok("false") | Ok("no") => false,
        _ => std::io::stdout().is_terminal(),
    };

    let env_filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(default_filter(env::var("AXUM_LOG_LEVEL").ok().as_deref()))
    };

    tracing_subscriber::fmt()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(span_events)
        .with_env_filter(env_filter)
        .with_ansi(use_color)
        .compact()
        .init();
}

/// Filter directives used when `RUST_LOG` is unset.
///
/// Our own and per-request (`TraceLayer`) events follow `AXUM_LOG_LEVEL`;
/// dependencies stay at warn.
fn default_filter(level: Option<&str>) -> String {
    // ---
    let level = match level {
        Some("trace") => "trace",
        Some("debug") => "debug",
        Some("info") => "info",
        Some("warn") => "warn",
        Some("error") => "error",
        _ => "debug",
    };
    format!("warn,kenya_farm_iot={level},tower_http={level}")
}
