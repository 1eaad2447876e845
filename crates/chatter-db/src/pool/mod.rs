//! Connection pool and schema migrations

mod migrations;
mod postgres;

pub use migrations::run_migrations;
pub use postgres::{create_pool, create_pool_from_env, ACQUIRE_TIMEOUT, IDLE_TIMEOUT};

pub use sqlx::postgres::PgPool;
