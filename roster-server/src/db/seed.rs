//! Development seed rows

use sqlx::SqlitePool;

use super::DbError;

/// Cohort names inserted by [`run`], given ids 1, 2, 3.
pub const SEED_COHORTS: &[&str] = &["WEBEU1", "WEBEU2", "WEBEU3"];

/// `(name, cohort_id)` pairs inserted by [`run`].
pub const SEED_STUDENTS: &[(&str, i64)] = &[("luke", 1), ("orlando", 1), ("samar", 3)];

/// Rows written by a seed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub cohorts: usize,
    pub students: usize,
}

/// Replace the contents of both tables with the fixed seed rows.
///
/// Id sequences are reset so the seeded ids always start at 1 and the
/// students' cohort references line up.
pub async fn run(pool: &SqlitePool) -> Result<SeedReport, DbError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM students").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM cohorts").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM sqlite_sequence WHERE name IN ('cohorts', 'students')")
        .execute(&mut *tx)
        .await?;

    for name in SEED_COHORTS {
        sqlx::query("INSERT INTO cohorts (name) VALUES (?)")
            .bind(*name)
            .execute(&mut *tx)
            .await?;
    }
    for (name, cohort_id) in SEED_STUDENTS {
        sqlx::query("INSERT INTO students (name, cohort_id) VALUES (?, ?)")
            .bind(*name)
            .bind(*cohort_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    let report = SeedReport {
        cohorts: SEED_COHORTS.len(),
        students: SEED_STUDENTS.len(),
    };
    tracing::info!(cohorts = report.cohorts, students = report.students, "Seeded database");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, schema};
    use crate::models::Cohort;

    #[tokio::test]
    async fn seeds_fixed_rows() {
        let pool = create_memory_pool().await.unwrap();
        schema::latest(&pool).await.unwrap();

        let report = run(&pool).await.unwrap();
        assert_eq!(report, SeedReport { cohorts: 3, students: 3 });

        let cohorts: Vec<Cohort> = sqlx::query_as("SELECT id, name FROM cohorts ORDER BY id")
            .fetch_all(&pool)
            .await
            .unwrap();
        let ids: Vec<i64> = cohorts.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(cohorts[2].name, "WEBEU3");
    }

    #[tokio::test]
    async fn reseeding_restarts_ids() {
        let pool = create_memory_pool().await.unwrap();
        schema::latest(&pool).await.unwrap();

        run(&pool).await.unwrap();
        sqlx::query("INSERT INTO cohorts (name) VALUES ('extra')")
            .execute(&pool)
            .await
            .unwrap();
        run(&pool).await.unwrap();

        let max_id: i64 = sqlx::query_scalar("SELECT MAX(id) FROM cohorts")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(max_id, 3);

        let samar_cohort: i64 =
            sqlx::query_scalar("SELECT cohort_id FROM students WHERE name = 'samar'")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(samar_cohort, 3);
    }

    #[tokio::test]
    async fn fails_without_schema() {
        let pool = create_memory_pool().await.unwrap();
        assert!(matches!(run(&pool).await, Err(DbError::Sqlx(_))));
    }
}
