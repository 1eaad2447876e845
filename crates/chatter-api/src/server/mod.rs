//! Server setup and initialization
//!
//! Wires the database, the classification client and the worker pool
//! together, then serves HTTP until shutdown.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use chatter_common::{AppConfig, AppError, TracingErrorReporter};
use chatter_db::{create_pool, run_migrations, PgForumContentRepository, PgSpamCheckRepository};
use chatter_service::{
    spam_check_queue, OpenAiClient, ServiceContext, ServiceContextBuilder, SpamCheckReceiver,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router, &config.cors, config.app.env.is_production());
    router.with_state(state)
}

/// Connect the database and build the service context
pub async fn create_service_context(config: &AppConfig) -> Result<ServiceContext, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&config.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    ServiceContextBuilder::new()
        .pool(pool.clone())
        .spam_check_repo(Arc::new(PgSpamCheckRepository::new(pool.clone())))
        .content_repo(Arc::new(PgForumContentRepository::new(pool)))
        .completions(Arc::new(OpenAiClient::new(config.openai.clone())))
        .reporter(Arc::new(TracingErrorReporter::new()))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Create the AppState and the receiver the worker pool consumes
pub fn create_app_state(
    service_context: Arc<ServiceContext>,
    config: AppConfig,
) -> (AppState, SpamCheckReceiver) {
    let (queue, receiver) = spam_check_queue(config.worker.queue_capacity);
    (AppState::new(service_context, queue, config), receiver)
}

/// Run the HTTP server until `shutdown` resolves
pub async fn run_server(
    app: Router,
    address: &str,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), AppError> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {address}: {e}")))?;

    let local = listener
        .local_addr()
        .map_err(|e| AppError::Config(e.to_string()))?;
    info!("Server listening on http://{}", local);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Resolves on Ctrl-C
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the HTTP server and the spam check worker pool
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let address = config.api.address();
    let concurrency = config.worker.concurrency;

    let service_context = Arc::new(create_service_context(&config).await?);
    let (state, receiver) = create_app_state(service_context.clone(), config);

    let worker = tokio::spawn(
        chatter_service::SpamCheckWorker::new(service_context, concurrency).run(receiver),
    );

    // Dropping the app drops the last queue handle, which lets the worker drain
    run_server(create_app(state), &address, shutdown_signal()).await?;

    worker
        .await
        .map_err(|e| AppError::Internal(anyhow::Error::new(e)))?;
    info!("Shutdown complete");
    Ok(())
}
