//! Load development seed rows

use anyhow::{Context, Result};
use clap::Parser;

use roster_server::db::seed;

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct SeedArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Replace both tables' rows with the fixed seed data.
pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let pool = args.database.connect().await?;

    let report = seed::run(&pool)
        .await
        .context("Failed to seed database (did you run `roster migrate latest`?)")?;

    println!(
        "Seeded {} cohorts and {} students",
        report.cohorts, report.students
    );
    Ok(())
}
