use axum::Router;
use configs::{AppConfig, StoreBackend, StoreConfig};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Database name from a connection URL, without credentials.
fn database_name(url: &str) -> &str {
    let path = url.rsplit('/').next().unwrap_or_default();
    path.split('?').next().unwrap_or_default()
}

/// Open the store selected by config and wrap it in handler state.
///
/// An unreachable store is logged and tolerated; requests then fail against it.
pub async fn build_state(store: &StoreConfig) -> Result<AppState, StartupError> {
    match store.backend {
        StoreBackend::Memory => {
            warn!(service = "server", event = "store_memory", "using in-memory store; documents are lost on restart");
            Ok(AppState::in_memory())
        }
        StoreBackend::Postgres => {
            let db = models::db::connect_with_config(store)
                .await
                .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
            let name = database_name(&store.url);
            match models::db::prepare(&db).await {
                Ok(()) => info!(service = "server", event = "store_connected", database = name, "Successfully connected to the {name} database"),
                Err(e) => error!(service = "server", event = "store_connect_failed", database = name, error = %e, "Database Connection Failed"),
            }
            Ok(AppState::sea_orm(db))
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(service = "server", event = "signal_error", error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(service = "server", event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg.store).await?;
    let app = build_app(state);

    let addr = cfg.server.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(service = "server", event = "listening", %addr, "API running on http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
