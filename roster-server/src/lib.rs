//! roster-server: HTTP API over cohorts and students
//!
//! - `models`: typed request shapes with validation at construction
//! - `db`: pool, schema migrations, seed rows and repositories
//! - `http`: axum router, handlers and error mapping

pub mod db;
pub mod http;
pub mod models;

pub use http::{run_server, ApiError, AppState, ServerConfig};
