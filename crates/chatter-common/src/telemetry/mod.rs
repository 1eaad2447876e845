//! Telemetry, tracing setup and error reporting

mod reporter;
mod tracing_setup;

pub use reporter::{ErrorReporter, TracingErrorReporter};
pub use tracing_setup::{
    try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError,
};
