//! HTTP server lifecycle: serving, stop signals and connection draining.

use std::{future::Future, future::IntoFuture, time::Duration};

use anyhow::Result;
use axum::Router;
use tokio::{net::TcpListener, sync::oneshot};

// ---

/// Serve `app` on `listener` until `shutdown` resolves.
///
/// Once `shutdown` fires the server stops accepting connections and waits for
/// in-flight requests. If they have not finished after `grace`, the server
/// returns anyway.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    grace: Duration,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    // ---
    let (fired_tx, fired_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            let _ = fired_tx.send(());
        })
        .into_future();
    tokio::pin!(server);

    let deadline = async move {
        match fired_rx.await {
            Ok(()) => {
                tracing::info!(
                    "Graceful shutdown initiated, waiting up to {} seconds for connections to close",
                    grace.as_secs()
                );
                tokio::time::sleep(grace).await;
            }
            // Server finished without a shutdown request
            Err(_) => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        res = &mut server => {
            res?;
            tracing::info!("Server stopped");
        }
        _ = deadline => {
            tracing::warn!("Grace period elapsed with connections still open, stopping");
        }
    }

    Ok(())
}

/// Resolve on Ctrl+C or, on Unix, SIGTERM.
///
/// If a handler cannot be installed the error is logged and that branch never
/// resolves, leaving the other one in charge.
pub async fn shutdown_signal() {
    // ---
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
