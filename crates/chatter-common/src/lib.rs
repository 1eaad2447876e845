//! # chatter-common
//!
//! Shared utilities including configuration, error handling, telemetry and
//! the process-wide error reporter.

pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, OpenAiConfig,
    ServerConfig, WorkerConfig,
};
pub use error::{domain_status, AppError, AppResult};
pub use telemetry::{
    try_init_tracing, try_init_tracing_with_config, ErrorReporter, TracingConfig, TracingError,
    TracingErrorReporter,
};
