//! Process-wide error reporting capability
//!
//! Background work that must never surface an error to its caller hands the
//! error to an `ErrorReporter` instead. Production wires the tracing-backed
//! reporter; tests substitute a recording one.

use std::error::Error;

use tracing::Level;

/// Sink for errors that are handled locally but still need to be seen
pub trait ErrorReporter: Send + Sync {
    /// Report a handled error
    fn report(&self, error: &(dyn Error + 'static));

    /// Emit a diagnostic message at the given level
    fn log(&self, level: Level, message: &str);
}

/// Reporter that forwards everything to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorReporter;

impl TracingErrorReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, error: &(dyn Error + 'static)) {
        let mut causes = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }

        tracing::error!(error = %error, causes = ?causes, "Reported error");
    }

    fn log(&self, level: Level, message: &str) {
        // tracing needs the level at compile time
        match level {
            Level::ERROR => tracing::error!("{message}"),
            Level::WARN => tracing::warn!("{message}"),
            Level::INFO => tracing::info!("{message}"),
            Level::DEBUG => tracing::debug!("{message}"),
            _ => tracing::trace!("{message}"),
        }
    }
}
