//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the rates service.

mod handlers;
mod logging;
mod server;

pub use handlers::{ApiError, AppState};
pub use server::HttpServer;
