//! Schema migration commands (latest, rollback, status)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use roster_server::db::schema;

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    /// Apply all pending migrations as a new batch
    Latest,
    /// Revert the most recent batch
    Rollback,
    /// Show which migrations are applied
    Status,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = args.database.connect().await?;

    match args.action {
        MigrateAction::Latest => {
            let applied = schema::latest(&pool)
                .await
                .context("Failed to apply migrations")?;
            if applied.is_empty() {
                println!("Already up to date");
            }
            for name in applied {
                println!("applied  {}", name);
            }
        }
        MigrateAction::Rollback => {
            let reverted = schema::rollback(&pool)
                .await
                .context("Failed to roll back migrations")?;
            if reverted.is_empty() {
                println!("Nothing to roll back");
            }
            for name in reverted {
                println!("reverted {}", name);
            }
        }
        MigrateAction::Status => {
            let statuses = schema::status(&pool)
                .await
                .context("Failed to read migration status")?;
            for status in statuses {
                match status.batch {
                    Some(batch) => println!("batch {:<3} {}", batch, status.name),
                    None => println!("pending   {}", status.name),
                }
            }
        }
    }

    Ok(())
}
