//! HTTP layer
//!
//! Axum server with:
//! - Permissive or localhost-only CORS
//! - Request tracing
//! - Optional static front-end directory
//! - JSON error responses

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ItemsServerConfig, ServerError};
