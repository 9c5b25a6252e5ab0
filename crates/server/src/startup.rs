use std::sync::Arc;

use configs::AppConfig;
use migration::MigratorTrait;
use service::product::{repo::seaorm::SeaOrmProductRepository, ProductService};
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::routes::{self, ServerState};

/// Where the running configuration came from.
#[derive(Debug)]
pub enum ConfigSource {
    File,
    /// The config file was missing or invalid; `reason` says why.
    Environment { reason: String },
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `config.toml` (or `CONFIG_PATH`), falling back to environment variables.
pub fn load_config() -> (AppConfig, ConfigSource) {
    match AppConfig::load_and_validate() {
        Ok(cfg) => (cfg, ConfigSource::File),
        Err(e) => {
            let mut cfg = AppConfig::from_env();
            if cfg.database.url.trim().is_empty() {
                cfg.database.url = models::db::DATABASE_URL.clone();
            }
            (cfg, ConfigSource::Environment { reason: e.to_string() })
        }
    }
}

/// Wire repository, service and router on top of a database connection.
pub fn build_app(db: sea_orm::DatabaseConnection) -> axum::Router {
    let repo = Arc::new(SeaOrmProductRepository::new(db));
    let state = ServerState::new(ProductService::new(repo));
    routes::build_router(build_cors(), state)
}

/// Public entry: connect, migrate, and serve until a shutdown signal arrives
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    cfg.database.validate()?;

    let db = models::db::connect_with_config(&models::db::DatabaseConfig::from(&cfg.database)).await?;
    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None).await?;
        info!(event = "migrations_applied", "database schema up to date");
    }

    let app = build_app(db);

    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "product api listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!(event = "stop", "server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
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
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!(event = "shutdown_signal", "shutdown signal received, draining connections");
}
