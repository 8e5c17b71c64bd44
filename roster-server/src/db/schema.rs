//! Schema migrations for the roster tables
//!
//! Migrations are applied in order and recorded in `roster_migrations`.
//! Each `latest` run that applies anything is one batch; `rollback` reverts
//! the most recent batch in reverse order.

use serde::Serialize;
use sqlx::SqlitePool;

use super::DbError;

/// A named, reversible schema change
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub name: &'static str,
    pub up: &'static [&'static str],
    pub down: &'static [&'static str],
}

/// All migrations known to this build, in apply order.
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        name: "20190327122749_create_cohorts",
        up: &[r#"
            CREATE TABLE cohorts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(128)
            )
            "#],
        down: &["DROP TABLE IF EXISTS cohorts"],
    },
    // cohort_id carries no REFERENCES clause: students may point at missing
    // cohorts and deleting a cohort leaves its students in place.
    Migration {
        name: "20190327123015_create_students",
        up: &[
            r#"
            CREATE TABLE students (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(128),
                cohort_id INTEGER
            )
            "#,
            "CREATE INDEX idx_students_cohort ON students(cohort_id)",
        ],
        down: &["DROP TABLE IF EXISTS students"],
    },
];

/// Applied state of one migration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationStatus {
    pub name: &'static str,
    /// Batch the migration was applied in, `None` if pending
    pub batch: Option<i64>,
}

async fn ensure_ledger(pool: &SqlitePool) -> Result<(), DbError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS roster_migrations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            batch INTEGER NOT NULL,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn applied(pool: &SqlitePool) -> Result<Vec<(String, i64)>, DbError> {
    let rows = sqlx::query_as("SELECT name, batch FROM roster_migrations ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Apply every pending migration as a new batch.
///
/// Returns the names applied, empty if the schema is already current.
pub async fn latest(pool: &SqlitePool) -> Result<Vec<&'static str>, DbError> {
    ensure_ledger(pool).await?;

    let done = applied(pool).await?;
    let batch = done.iter().map(|(_, b)| *b).max().unwrap_or(0) + 1;

    let mut names = Vec::new();
    for migration in MIGRATIONS {
        if done.iter().any(|(name, _)| name == migration.name) {
            continue;
        }

        let mut tx = pool.begin().await?;
        for statement in migration.up {
            sqlx::query(statement).execute(&mut *tx).await?;
        }
        sqlx::query("INSERT INTO roster_migrations (name, batch) VALUES (?, ?)")
            .bind(migration.name)
            .bind(batch)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(migration = migration.name, batch, "Applied migration");
        names.push(migration.name);
    }

    Ok(names)
}

/// Revert the most recent batch, newest migration first.
pub async fn rollback(pool: &SqlitePool) -> Result<Vec<&'static str>, DbError> {
    ensure_ledger(pool).await?;

    let done = applied(pool).await?;
    let Some(last_batch) = done.iter().map(|(_, b)| *b).max() else {
        return Ok(Vec::new());
    };

    let mut names = Vec::new();
    for (name, _) in done.iter().rev().filter(|(_, b)| *b == last_batch) {
        let migration = MIGRATIONS
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| DbError::UnknownMigration { name: name.clone() })?;

        let mut tx = pool.begin().await?;
        for statement in migration.down {
            sqlx::query(statement).execute(&mut *tx).await?;
        }
        sqlx::query("DELETE FROM roster_migrations WHERE name = ?")
            .bind(migration.name)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(migration = migration.name, batch = last_batch, "Reverted migration");
        names.push(migration.name);
    }

    Ok(names)
}

/// Report every known migration with the batch it was applied in.
pub async fn status(pool: &SqlitePool) -> Result<Vec<MigrationStatus>, DbError> {
    ensure_ledger(pool).await?;

    let done = applied(pool).await?;
    Ok(MIGRATIONS
        .iter()
        .map(|m| MigrationStatus {
            name: m.name,
            batch: done
                .iter()
                .find(|(name, _)| name == m.name)
                .map(|(_, b)| *b),
        })
        .collect())
}
