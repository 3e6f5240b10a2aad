use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Open a connection pool from validated configuration.
///
/// The handle is constructed explicitly at startup and passed to the
/// components that need it; there is no module-level connection singleton.
pub async fn connect(cfg: &configs::DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    Ok(db)
}

/// Connection settings for tests and tooling: DATABASE_URL with defaults
/// for everything else.
pub fn config_from_env() -> configs::DatabaseConfig {
    let _ = dotenvy::dotenv();
    let mut cfg = configs::DatabaseConfig::default();
    cfg.normalize_from_env();
    cfg
}
