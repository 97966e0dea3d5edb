//! Axum server setup
//!
//! Server skeleton with:
//! - Permissive CORS by default, localhost-only on request
//! - Tracing middleware
//! - Graceful shutdown driven by the caller's signal future

use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::db::ItemStore;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ItemsServerConfig {
    /// Address to bind to (default: 0.0.0.0:5000)
    pub bind_addr: SocketAddr,

    /// Allow any origin (default: true). When false only localhost
    /// front ends on ports 3000 and 5000 may call the API.
    pub cors_permissive: bool,

    /// Directory served at `/` for a browser front end
    pub static_dir: Option<PathBuf>,
}

impl Default for ItemsServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            cors_permissive: true,
            static_dir: None,
        }
    }
}

/// Shared application state
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
}

fn cors_layer(permissive: bool) -> CorsLayer {
    if permissive {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://localhost:5000"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
            HeaderValue::from_static("http://127.0.0.1:5000"),
        ])
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the item API router.
pub fn build_router(store: Arc<dyn ItemStore>, config: &ItemsServerConfig) -> Router {
    let state = AppState { store };

    let mut app = Router::new()
        .merge(routes::health::router())
        .merge(routes::items::router());

    if let Some(dir) = &config.static_dir {
        tracing::info!(dir = %dir.display(), "Serving static front end");
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(cors_layer(config.cors_permissive))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server until `shutdown` resolves.
///
/// # Example
///
/// ```ignore
/// let store = PgItemStore::connect(&database_url, ConnectionMode::PerRequest, 5).await?;
/// run_server(Arc::new(store), ItemsServerConfig::default(), shutdown_signal()).await?;
/// ```
pub async fn run_server<F>(
    store: Arc<dyn ItemStore>,
    config: ItemsServerConfig,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
    }
    let app = build_router(store, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Item server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Item server shutdown complete");
    Ok(())
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
