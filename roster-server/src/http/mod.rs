//! HTTP server layer
//!
//! Axum server with:
//! - Cohort and student routes under `/api`
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod server;
pub mod error;
pub mod extractors;
pub mod response;
pub mod routes;

pub use server::{router, run_server, AppState, ServerConfig, ServerError};
pub use error::ApiError;
