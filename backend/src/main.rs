//! Backend entry-point: loads settings, prepares the store, and serves the
//! catalogue API.

mod server;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use nzwalks_backend::inbound::http::health::HealthState;
use nzwalks_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use nzwalks_backend::settings::AppSettings;
use ortho_config::OrthoConfig;

use server::{ServerConfig, create_server};

async fn connect_database(settings: &AppSettings, url: &str) -> std::io::Result<DbPool> {
    if settings.skip_migrations {
        info!("skipping database migrations");
    } else {
        run_pending_migrations(url)
            .await
            .map_err(std::io::Error::other)?;
    }

    let pool_config = PoolConfig::new(url).with_max_size(settings.db_max_connections());
    DbPool::new(pool_config).await.map_err(std::io::Error::other)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let bind_addr = settings.bind_addr().map_err(|err| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("invalid bind address {}: {err}", settings.host()),
        )
    })?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(url) = settings.database_url() {
        let pool = connect_database(&settings, url).await?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "nzwalks backend listening");

    let result = server.await;
    health_state.mark_unhealthy();
    result
}
