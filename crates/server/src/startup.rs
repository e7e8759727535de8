use std::{future::Future, sync::Arc};

use axum::Router;
use common::remote::RemoteUsersClient;
use configs::AppConfig;
use service::users::LocalUserStore;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Wire the remote client and the file-backed store from configuration
pub fn build_state(cfg: &AppConfig) -> anyhow::Result<AppState> {
    let remote = RemoteUsersClient::new(&cfg.remote.users_url)?;
    let users = LocalUserStore::open(&cfg.storage.users_file, &cfg.storage.reset_file);
    Ok(AppState { remote: Arc::new(remote), users })
}

pub fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    Ok(routes::build_router(build_state(cfg)?, build_cors()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, "server running at http://{addr}");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

/// Public entry: build the app from `cfg` and run until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    common::env::ensure_data_dirs(&[&cfg.storage.users_file, &cfg.storage.reset_file]).await?;
    let app = build_app(&cfg)?;
    info!(
        users_file = %cfg.storage.users_file,
        reset_file = %cfg.storage.reset_file,
        remote = %cfg.remote.users_url,
        "configuration loaded"
    );
    let listener = TcpListener::bind(cfg.bind_addr()).await?;
    serve(listener, app, shutdown_signal()).await
}
