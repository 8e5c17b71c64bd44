//! Student records and request shapes

use serde::Serialize;
use sqlx::FromRow;

use super::validation::{check_name, present_id, present_str};
use super::ValidationError;

/// Student row as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub cohort_id: i64,
}

/// Student with its cohort name in place of `cohort_id`.
///
/// `cohort` is `None` when the referenced cohort no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct StudentDetail {
    pub id: i64,
    pub name: String,
    pub cohort: Option<String>,
}

/// Validated input for inserting a student
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    name: String,
    cohort_id: i64,
}

impl NewStudent {
    pub fn new(name: Option<String>, cohort_id: Option<i64>) -> Result<Self, ValidationError> {
        let name = present_str(name).ok_or(ValidationError::Missing { field: "name" })?;
        let cohort_id =
            present_id(cohort_id).ok_or(ValidationError::Missing { field: "cohort_id" })?;
        check_name("name", &name)?;
        Ok(Self { name, cohort_id })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cohort_id(&self) -> i64 {
        self.cohort_id
    }
}

/// Partial student update; only present fields are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentPatch {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub cohort_id: Option<i64>,
}

impl StudentPatch {
    pub fn new(
        id: Option<i64>,
        name: Option<String>,
        cohort_id: Option<i64>,
    ) -> Result<Self, ValidationError> {
        let patch = Self {
            id: present_id(id),
            name: present_str(name),
            cohort_id: present_id(cohort_id),
        };

        if patch.id.is_none() && patch.name.is_none() && patch.cohort_id.is_none() {
            return Err(ValidationError::Missing {
                field: "id, name or cohort_id",
            });
        }
        if let Some(name) = &patch.name {
            check_name("name", name)?;
        }

        Ok(patch)
    }
}
