use std::sync::Arc;

use axum::Router;
use configs::{AppConfig, ServerConfig};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::product::{ProductService, SeaOrmProductRepository};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Bind `host:port`; hostnames such as `localhost` are resolved by tokio.
async fn bind_listener(server: &ServerConfig) -> Result<TcpListener, StartupError> {
    TcpListener::bind((server.host.as_str(), server.port))
        .await
        .map_err(|source| StartupError::Bind { addr: server.bind_addr(), source })
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
    }
}

/// Wire repository, service and router together for an open connection.
pub fn build_app(db: sea_orm::DatabaseConnection) -> Router {
    let repo = Arc::new(SeaOrmProductRepository::new(db));
    let state = ServerState::new(ProductService::new(repo));
    routes::build_router(state, build_cors())
}

/// Public entry: connect the database, build the app and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    let app = build_app(db);

    let listener = bind_listener(&cfg.server).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "starting product catalog server");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!(event = "stop", "server stopped");
    Ok(())
}
