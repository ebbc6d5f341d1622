use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use migration::{Migrator, MigratorTrait};
use tracing::info;

use crate::routes::{self, AppState};

/// Connect, migrate, and serve until ctrl-c.
pub async fn serve(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect(&cfg.database).await?;
    Migrator::up(&db, None).await?;
    info!("database schema up to date");

    let cors = routes::build_cors(&cfg.app);
    let state = AppState::new(db, cfg.app);
    let app: Router = routes::build_router(state, cors);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
