//! Cohort endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;

use crate::db::repos::{CohortRepo, StudentRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, RecordId};
use crate::http::response::{Deleted, Listing, Updated};
use crate::http::server::AppState;
use crate::models::{Cohort, CohortPatch, NewCohort, Student};

const NO_SUCH_COHORT: &str = "no cohorts exist with the provided id";
const NO_STUDENTS_ENROLLED: &str = "there are currently no students enrolled in this course";

/// Cohort request body, used by both POST and PUT
#[derive(Debug, Default, Deserialize)]
pub struct CohortBody {
    pub id: Option<i64>,
    pub name: Option<String>,
}

/// POST /api/cohorts - create a cohort, answering with `[id]`
async fn create_cohort(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CohortBody>,
) -> Result<(StatusCode, Json<Vec<i64>>), ApiError> {
    let cohort = NewCohort::new(body.name).map_err(|e| {
        ApiError::from_validation(e, "please include a name field with your cohort")
    })?;

    let id = CohortRepo::new(&state.pool)
        .create(&cohort)
        .await
        .map_err(ApiError::store("the cohort could not be added"))?;

    tracing::debug!(id, "Created cohort");
    Ok((StatusCode::CREATED, Json(vec![id])))
}

/// GET /api/cohorts - list all cohorts
async fn list_cohorts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Listing<Cohort>>, ApiError> {
    let cohorts = CohortRepo::new(&state.pool)
        .list()
        .await
        .map_err(ApiError::store("the cohorts could not be retrieved"))?;

    Ok(Json(Listing::new(
        cohorts,
        "the cohorts list is empty, add a cohort to get started",
    )))
}

/// GET /api/cohorts/{id} - get a single cohort as a one-row array
async fn get_cohort(
    State(state): State<Arc<AppState>>,
    id: RecordId,
) -> Result<Json<Vec<Cohort>>, ApiError> {
    let id = id.or_not_found(NO_SUCH_COHORT)?;
    let cohort = CohortRepo::new(&state.pool)
        .find(id)
        .await
        .map_err(ApiError::store("there was an error finding the cohort"))?
        .ok_or(ApiError::NotFound {
            message: NO_SUCH_COHORT,
        })?;

    Ok(Json(vec![cohort]))
}

/// DELETE /api/cohorts/{id} - delete a cohort; its students stay behind
async fn delete_cohort(
    State(state): State<Arc<AppState>>,
    id: RecordId,
) -> Result<Json<Deleted>, ApiError> {
    let id = id.or_not_found(NO_SUCH_COHORT)?;
    let count = CohortRepo::new(&state.pool)
        .delete(id)
        .await
        .map_err(ApiError::store("there was an error deleting the cohort"))?;

    if count == 0 {
        return Err(ApiError::NotFound {
            message: NO_SUCH_COHORT,
        });
    }
    Ok(Json(Deleted {
        deleted_records: count,
    }))
}

/// PUT /api/cohorts/{id} - partial update
async fn update_cohort(
    State(state): State<Arc<AppState>>,
    id: RecordId,
    JsonBody(body): JsonBody<CohortBody>,
) -> Result<Json<Updated>, ApiError> {
    let patch = CohortPatch::new(body.id, body.name).map_err(|e| {
        ApiError::from_validation(e, "please include an id or name field with your cohort update")
    })?;
    let id = id.or_not_found(NO_SUCH_COHORT)?;

    let count = CohortRepo::new(&state.pool)
        .update(id, &patch)
        .await
        .map_err(ApiError::store("there was an error updating the cohort"))?;

    if count == 0 {
        return Err(ApiError::NotFound {
            message: NO_SUCH_COHORT,
        });
    }
    Ok(Json(Updated {
        updated_records: count,
    }))
}

/// GET /api/cohorts/{id}/students - students enrolled in a cohort
///
/// An unknown cohort and a cohort without students both answer 404.
async fn list_cohort_students(
    State(state): State<Arc<AppState>>,
    id: RecordId,
) -> Result<Json<Vec<Student>>, ApiError> {
    let id = id.or_not_found(NO_STUDENTS_ENROLLED)?;
    let students = StudentRepo::new(&state.pool)
        .list_by_cohort(id)
        .await
        .map_err(ApiError::store(
            "there was an error finding students for the cohort",
        ))?;

    if students.is_empty() {
        return Err(ApiError::NotFound {
            message: NO_STUDENTS_ENROLLED,
        });
    }
    Ok(Json(students))
}

/// Cohort routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/cohorts", get(list_cohorts).post(create_cohort))
        .route(
            "/api/cohorts/{id}",
            get(get_cohort).delete(delete_cohort).put(update_cohort),
        )
        .route("/api/cohorts/{id}/students", get(list_cohort_students))
}
