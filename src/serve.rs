//! Local preview server for an exported site.
//!
//! Serves the export directory exactly as a static host would, mounted
//! under the configured base path so asset URLs resolve unchanged.

#[cfg(test)]
#[path = "serve_test.rs"]
mod serve_test;

use std::future::Future;
use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use axum::response::Redirect;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::AppError;

/// Router serving `root` at `base_path` (empty for the domain root).
pub fn router(root: &Path, base_path: &str) -> Router {
    let files = ServeDir::new(root).append_index_html_on_directories(true);
    let app = if base_path.is_empty() {
        Router::new().fallback_service(files)
    } else {
        let home = format!("{base_path}/");
        Router::new()
            .route("/", get(move || async move { Redirect::temporary(&home) }))
            .nest_service(base_path, files)
    };
    app.layer(CompressionLayer::new()).layer(TraceLayer::new_for_http())
}

/// Bind `addr` and serve until Ctrl-C.
///
/// # Errors
///
/// [`AppError::Bind`] when the address is unavailable, [`AppError::Serve`]
/// when the server stops with an I/O error.
pub async fn run(root: &Path, base_path: &str, addr: SocketAddr) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr).await.map_err(|source| AppError::Bind { addr, source })?;
    serve(listener, root, base_path, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves.
///
/// # Errors
///
/// [`AppError::Serve`] when the server stops with an I/O error.
pub async fn serve(
    listener: TcpListener,
    root: &Path,
    base_path: &str,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), AppError> {
    match listener.local_addr() {
        Ok(local) => tracing::info!(url = %format!("http://{local}{base_path}/"), root = %root.display(), "serving export"),
        Err(err) => tracing::warn!(error = %err, "listener has no local address"),
    }
    axum::serve(listener, router(root, base_path))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(AppError::Serve)?;
    tracing::info!("preview server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "ctrl-c handler unavailable; stop the process to exit");
        std::future::pending::<()>().await;
    }
}
