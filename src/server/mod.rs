//! HTTP serving of the tree catalog.
//!
//! The catalog is built before the server starts and handed to the router as
//! shared read-only state; request handling never mutates it.

pub mod routes;
pub mod views;

use crate::catalog::TreeCatalog;
use crate::error::CanopyError;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared state for request handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<TreeCatalog>,
}

/// Build the application router.
pub fn router(catalog: Arc<TreeCatalog>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/trees.json", get(routes::trees_json))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { catalog })
}

/// Bind and serve until a shutdown signal arrives.
pub async fn serve(bind: SocketAddr, catalog: Arc<TreeCatalog>) -> Result<(), CanopyError> {
    let app = router(catalog);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!(addr = %bind, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        warn!("failed to install ctrl-c handler; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
