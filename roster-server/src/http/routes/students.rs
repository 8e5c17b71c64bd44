//! Student endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;

use crate::db::repos::StudentRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, RecordId};
use crate::http::response::{Deleted, Listing, Updated};
use crate::http::server::AppState;
use crate::models::{NewStudent, Student, StudentDetail, StudentPatch};

const NO_SUCH_STUDENT: &str = "no students exist with the provided id";

/// Student request body, used by both POST and PUT
#[derive(Debug, Default, Deserialize)]
pub struct StudentBody {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub cohort_id: Option<i64>,
}

/// POST /api/students - create a student, answering with `[id]`
async fn create_student(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<StudentBody>,
) -> Result<(StatusCode, Json<Vec<i64>>), ApiError> {
    let student = NewStudent::new(body.name, body.cohort_id).map_err(|e| {
        ApiError::from_validation(e, "please include a name and cohort_id field with your student")
    })?;

    let id = StudentRepo::new(&state.pool)
        .create(&student)
        .await
        .map_err(ApiError::store("the student could not be added"))?;

    tracing::debug!(id, cohort_id = student.cohort_id(), "Created student");
    Ok((StatusCode::CREATED, Json(vec![id])))
}

/// GET /api/students - list all students
async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Listing<Student>>, ApiError> {
    let students = StudentRepo::new(&state.pool)
        .list()
        .await
        .map_err(ApiError::store("the students could not be retrieved"))?;

    Ok(Json(Listing::new(
        students,
        "the students list is empty, add a student to get started",
    )))
}

/// GET /api/students/{id} - student with `cohort` name instead of `cohort_id`
async fn get_student(
    State(state): State<Arc<AppState>>,
    id: RecordId,
) -> Result<Json<StudentDetail>, ApiError> {
    let id = id.or_not_found(NO_SUCH_STUDENT)?;
    let student = StudentRepo::new(&state.pool)
        .find_detail(id)
        .await
        .map_err(ApiError::store("there was an error finding the student"))?
        .ok_or(ApiError::NotFound {
            message: NO_SUCH_STUDENT,
        })?;

    Ok(Json(student))
}

/// DELETE /api/students/{id}
async fn delete_student(
    State(state): State<Arc<AppState>>,
    id: RecordId,
) -> Result<Json<Deleted>, ApiError> {
    let id = id.or_not_found(NO_SUCH_STUDENT)?;
    let count = StudentRepo::new(&state.pool)
        .delete(id)
        .await
        .map_err(ApiError::store("there was an error deleting the student"))?;

    if count == 0 {
        return Err(ApiError::NotFound {
            message: NO_SUCH_STUDENT,
        });
    }
    Ok(Json(Deleted {
        deleted_records: count,
    }))
}

/// PUT /api/students/{id} - partial update of any of id, name, cohort_id
async fn update_student(
    State(state): State<Arc<AppState>>,
    id: RecordId,
    JsonBody(body): JsonBody<StudentBody>,
) -> Result<Json<Updated>, ApiError> {
    let patch = StudentPatch::new(body.id, body.name, body.cohort_id).map_err(|e| {
        ApiError::from_validation(
            e,
            "please include an id, name or cohort_id field with your student update",
        )
    })?;
    let id = id.or_not_found(NO_SUCH_STUDENT)?;

    let count = StudentRepo::new(&state.pool)
        .update(id, &patch)
        .await
        .map_err(ApiError::store("there was an error updating the student"))?;

    if count == 0 {
        return Err(ApiError::NotFound {
            message: NO_SUCH_STUDENT,
        });
    }
    Ok(Json(Updated {
        updated_records: count,
    }))
}

/// Student routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/students", get(list_students).post(create_student))
        .route(
            "/api/students/{id}",
            get(get_student).delete(delete_student).put(update_student),
        )
}
