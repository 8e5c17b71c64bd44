//! Database layer - connection pool, schema, seeds and repositories
//!
//! # Design Principles
//!
//! - Connection pool handed to handlers, no global connection
//! - Reads that span both tables use a JOIN, never two round trips
//! - No foreign keys: a student's cohort reference is not enforced
//! - Transactions for multi-step operations (migrations, seeding)

pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod seed;

pub use error::DbError;
pub use pool::{create_memory_pool, create_pool, create_pool_with_options, ping, DEFAULT_DATABASE_URL};
pub use repos::*;
pub use sqlx::SqlitePool;
