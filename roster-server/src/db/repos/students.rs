//! Student repository
//!
//! `find_detail` resolves the cohort name with a LEFT JOIN so the student
//! and its cohort are read in one statement.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::db::DbError;
use crate::models::{NewStudent, Student, StudentDetail, StudentPatch};

/// Student repository
pub struct StudentRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> StudentRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a student and return its generated id.
    ///
    /// `cohort_id` is stored as given; no existence check.
    pub async fn create(&self, student: &NewStudent) -> Result<i64, DbError> {
        let id = sqlx::query_scalar(
            "INSERT INTO students (name, cohort_id) VALUES (?, ?) RETURNING id",
        )
        .bind(student.name())
        .bind(student.cohort_id())
        .fetch_one(self.pool)
        .await?;
        Ok(id)
    }

    pub async fn list(&self) -> Result<Vec<Student>, DbError> {
        let students = sqlx::query_as("SELECT id, name, cohort_id FROM students ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(students)
    }

    /// Students enrolled in a cohort, in id order.
    pub async fn list_by_cohort(&self, cohort_id: i64) -> Result<Vec<Student>, DbError> {
        let students = sqlx::query_as(
            "SELECT id, name, cohort_id FROM students WHERE cohort_id = ? ORDER BY id",
        )
        .bind(cohort_id)
        .fetch_all(self.pool)
        .await?;
        Ok(students)
    }

    /// Get a student with its cohort name.
    pub async fn find_detail(&self, id: i64) -> Result<Option<StudentDetail>, DbError> {
        let detail = sqlx::query_as(
            r#"
            SELECT s.id, s.name, c.name AS cohort
            FROM students s
            LEFT JOIN cohorts c ON c.id = s.cohort_id
            WHERE s.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(detail)
    }

    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Apply a partial update, returning rows changed.
    pub async fn update(&self, id: i64, patch: &StudentPatch) -> Result<u64, DbError> {
        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE students SET ");
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
            if let Some(cohort_id) = patch.cohort_id {
                fields.push("cohort_id = ");
                fields.push_bind_unseparated(cohort_id);
            }
        }
        query.push(" WHERE id = ");
        query.push_bind(id);

        let result = query.build().execute(self.pool).await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, schema, seed};

    async fn seeded() -> SqlitePool {
        let pool = create_memory_pool().await.unwrap();
        schema::latest(&pool).await.unwrap();
        seed::run(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn detail_joins_cohort_name() {
        let pool = seeded().await;
        let repo = StudentRepo::new(&pool);

        let luke = repo.find_detail(1).await.unwrap().unwrap();
        assert_eq!(
            luke,
            StudentDetail {
                id: 1,
                name: "luke".into(),
                cohort: Some("WEBEU1".into()),
            }
        );
        assert!(repo.find_detail(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn detail_of_orphan_has_no_cohort() {
        let pool = seeded().await;
        let repo = StudentRepo::new(&pool);

        let new = NewStudent::new(Some("drifter".into()), Some(77)).unwrap();
        let id = repo.create(&new).await.unwrap();

        let detail = repo.find_detail(id).await.unwrap().unwrap();
        assert_eq!(detail.cohort, None);
    }

    #[tokio::test]
    async fn list_by_cohort_filters() {
        let pool = seeded().await;
        let repo = StudentRepo::new(&pool);

        let names: Vec<String> = repo
            .list_by_cohort(1)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["luke", "orlando"]);
        assert!(repo.list_by_cohort(2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_moves_student_between_cohorts() {
        let pool = seeded().await;
        let repo = StudentRepo::new(&pool);

        let patch = StudentPatch::new(None, None, Some(2)).unwrap();
        assert_eq!(repo.update(2, &patch).await.unwrap(), 1);

        let orlando = repo.find_detail(2).await.unwrap().unwrap();
        assert_eq!(orlando.name, "orlando");
        assert_eq!(orlando.cohort.as_deref(), Some("WEBEU2"));
        assert_eq!(repo.update(50, &patch).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_counts_rows() {
        let pool = seeded().await;
        let repo = StudentRepo::new(&pool);

        assert_eq!(repo.delete(3).await.unwrap(), 1);
        assert_eq!(repo.delete(3).await.unwrap(), 0);
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }
}
