//! PostgreSQL connection pool

use std::time::Duration;

use chatter_common::DatabaseConfig;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

/// How long a spam check waits for a free connection before its write fails
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Idle connections above `min_connections` are closed after this long
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(300);

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(IDLE_TIMEOUT)
}

/// Connect a pool sized by the configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = pool_options(config).connect(&config.url).await?;
    info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "PostgreSQL pool connected"
    );
    Ok(pool)
}

/// Connect a small pool to the database named by `DATABASE_URL`.
///
/// Returns `Ok(None)` when the variable is unset. Used by tools and
/// database tests that run outside the full service configuration.
pub async fn create_pool_from_env() -> Result<Option<PgPool>, sqlx::Error> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        return Ok(None);
    };
    let config = DatabaseConfig {
        url,
        max_connections: 5,
        min_connections: 0,
    };
    create_pool(&config).await.map(Some)
}
