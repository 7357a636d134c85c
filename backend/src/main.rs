//! Backend entry-point: loads settings, probes storage, and serves the API.

mod server;

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use contact_backend::domain::ports::StorageProbe;
use contact_backend::outbound::persistence::{DbPool, DieselStorageProbe, PoolConfig};
use contact_backend::settings::{DatabaseSettings, ListenerSettings};
use server::{ServerConfig, create_server};

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

    let settings = DatabaseSettings::load().map_err(|e| {
        std::io::Error::other(format!("failed to load database settings: {e}"))
    })?;
    let database_url = settings
        .database_url()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let port = ListenerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load listener settings: {e}")))?
        .port();

    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(settings.pool_size()));
    match DieselStorageProbe::new(pool.clone()).ping().await {
        Ok(()) => info!(
            host = settings.host(),
            database = settings.name(),
            "database connection established"
        ),
        Err(err) => error!(
            error = %err,
            host = settings.host(),
            database = settings.name(),
            "database connection failed; requests will fail until it recovers"
        ),
    }

    let config = ServerConfig::new(SocketAddr::from(([0, 0, 0, 0], port)), pool);
    info!(bind_addr = %config.bind_addr(), "starting HTTP server");
    create_server(config)?.await
}
