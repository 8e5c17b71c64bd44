//! Command implementations for the roster CLI

pub mod migrate;
pub mod seed;
pub mod serve;

pub use migrate::run_migrate;
pub use seed::run_seed;
pub use serve::run_serve;

use anyhow::{Context, Result};
use clap::Args;
use roster_server::db::{create_pool, SqlitePool, DEFAULT_DATABASE_URL};

/// Database selection shared by every command
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (e.g. sqlite://roster.db)
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL, global = true)]
    pub database_url: String,
}

impl DatabaseArgs {
    /// Open the pool, creating the database file if needed.
    pub async fn connect(&self) -> Result<SqlitePool> {
        tracing::debug!(url = %self.database_url, "Opening database");
        create_pool(&self.database_url)
            .await
            .with_context(|| format!("Failed to open database {}", self.database_url))
    }
}
