use std::time::Duration;

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::{debug, info};

pub const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Connect using pool settings from `config.toml`.
///
/// An in-memory SQLite database lives inside a single connection, so the pool
/// is pinned to exactly one connection that is never recycled.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if cfg.is_sqlite() {
        // SQLite LIKE folds ASCII case unless told otherwise
        opt.map_sqlx_sqlite_opts(|o| o.pragma("case_sensitive_like", "ON"));
    }
    if is_in_memory(&cfg.url) {
        opt.max_connections(1).min_connections(1);
    } else {
        opt.max_connections(cfg.max_connections)
            .min_connections(cfg.min_connections)
            .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }
    debug!(url_in_memory = is_in_memory(&cfg.url), "opening database pool");
    Database::connect(opt).await
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Apply all pending migrations.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    migration::Migrator::up(db, None).await?;
    info!("database migrations applied");
    Ok(())
}

/// Fresh, migrated, private in-memory SQLite database.
pub async fn connect_in_memory() -> Result<DatabaseConnection, DbErr> {
    let cfg = DatabaseConfig { url: IN_MEMORY_URL.to_string(), ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    migrate(&db).await?;
    Ok(db)
}
