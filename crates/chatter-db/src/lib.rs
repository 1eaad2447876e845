//! # chatter-db
//!
//! Database layer implementing the `chatter-core` repository traits with
//! PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations for spam checks and forum content deletion
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chatter_common::DatabaseConfig;
//! use chatter_db::{create_pool, run_migrations, PgSpamCheckRepository};
//!
//! async fn example(config: &DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(config).await?;
//!     run_migrations(&pool).await?;
//!     let spam_checks = PgSpamCheckRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, PgPool};
pub use repositories::{PgForumContentRepository, PgSpamCheckRepository};
