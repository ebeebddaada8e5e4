use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use service::DataStore;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Build the application around an already constructed store.
pub fn build_app(store: Arc<DataStore>) -> Router {
    routes::build_router(AppState::new(store), build_cors())
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    cfg.bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("{}: {}", cfg.bind_addr(), e)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Serve until Ctrl+C. The store lives exactly as long as this call.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let store = Arc::new(DataStore::new());
    if cfg.store.seed_sample_data {
        store.seed_sample_data();
    }

    let app = build_app(Arc::clone(&store));

    let addr = bind_addr(&cfg)?;
    info!(%addr, stats = %store.stats(), "starting attendance server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_rejects_bad_host() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(matches!(bind_addr(&cfg), Err(StartupError::InvalidConfig(_))));
        cfg.server.host = "127.0.0.1".into();
        assert_eq!(bind_addr(&cfg).unwrap().port(), 8080);
    }
}
