//! # chatter-api
//!
//! HTTP intake for new forum content and read-only queries over recorded
//! spam checks, built with Axum. The `chatter-spam` binary runs this server
//! and the spam check worker pool in one process.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{
    create_app, create_app_state, create_service_context, run, run_server, shutdown_signal,
};
pub use state::AppState;
