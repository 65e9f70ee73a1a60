//! Axum web server: REST endpoints + WebSocket session streaming.

pub mod routes;
pub mod ws;

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Shared state for the web layer.
pub struct WebState {
    pub root: Arc<AppState>,
    pub ws_count: AtomicU64,
}

pub fn router(state: Arc<WebState>) -> Router {
    Router::new()
        .route("/api/catalog", get(routes::get_catalog))
        .route("/api/course", get(routes::get_course))
        .route("/api/plan", axum::routing::post(routes::post_plan))
        .route(
            "/api/session",
            get(routes::get_session).post(routes::post_session),
        )
        .route("/api/ws", get(ws::ws_upgrade))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run the web server until `shutdown` resolves.
pub async fn serve(
    addr: SocketAddr,
    root: Arc<AppState>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let state = Arc::new(WebState {
        root,
        ws_count: AtomicU64::new(0),
    });
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {addr}: {e}"))?;
    tracing::info!("web server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
