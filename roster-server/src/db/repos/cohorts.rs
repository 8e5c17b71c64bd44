//! Cohort repository
//!
//! One statement per operation. Partial updates are assembled with
//! `QueryBuilder` so only present fields appear in the SET list.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::db::DbError;
use crate::models::{Cohort, CohortPatch, NewCohort};

/// Cohort repository
pub struct CohortRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CohortRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a cohort and return its generated id.
    pub async fn create(&self, cohort: &NewCohort) -> Result<i64, DbError> {
        let id = sqlx::query_scalar("INSERT INTO cohorts (name) VALUES (?) RETURNING id")
            .bind(cohort.name())
            .fetch_one(self.pool)
            .await?;
        Ok(id)
    }

    /// List every cohort in id order.
    pub async fn list(&self) -> Result<Vec<Cohort>, DbError> {
        let cohorts = sqlx::query_as("SELECT id, name FROM cohorts ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(cohorts)
    }

    /// Get a single cohort by id.
    pub async fn find(&self, id: i64) -> Result<Option<Cohort>, DbError> {
        let cohort = sqlx::query_as("SELECT id, name FROM cohorts WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(cohort)
    }

    /// Delete a cohort, returning rows removed. Students are left in place.
    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM cohorts WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Apply a partial update, returning rows changed.
    pub async fn update(&self, id: i64, patch: &CohortPatch) -> Result<u64, DbError> {
        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE cohorts SET ");
        {
            let mut fields = query.separated(", ");
            if let Some(new_id) = patch.id {
                fields.push("id = ");
                fields.push_bind_unseparated(new_id);
            }
            if let Some(name) = &patch.name {
                fields.push("name = ");
                fields.push_bind_unseparated(name.clone());
            }
        }
        query.push(" WHERE id = ");
        query.push_bind(id);

        let result = query.build().execute(self.pool).await?;
        Ok(result.rows_affected())
    }
}
