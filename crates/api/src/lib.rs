//! REST API server and endpoints.
//!
//! This crate exposes the pricing core over HTTP:
//! - Quote generation with a per-factor breakdown
//! - Pool health assessment from indexer metrics
//! - The effective pricing configuration
//!
//! Configuration is loaded once at startup and shared read-only.

/// Settings loading from environment and files.
pub mod config;
/// Error types.
pub mod error;
/// Request handlers.
pub mod handlers;
/// API request/response models.
pub mod models;
/// Route definitions.
pub mod routes;
/// Server startup.
pub mod server;
/// Application state.
pub mod state;

pub use config::{ServerConfig, Settings, load_pricing_config};
pub use error::ApiError;
pub use routes::router;
pub use server::ApiServer;
pub use state::AppState;
