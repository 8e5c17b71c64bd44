//! Cohort records and request shapes

use serde::Serialize;
use sqlx::FromRow;

use super::validation::{check_name, present_id, present_str};
use super::ValidationError;

/// Cohort row as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Cohort {
    pub id: i64,
    pub name: String,
}

/// Validated input for inserting a cohort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCohort {
    name: String,
}

impl NewCohort {
    /// Build from an optional request field.
    ///
    /// An absent or empty name is `Missing`; longer than the column is `TooLong`.
    pub fn new(name: Option<String>) -> Result<Self, ValidationError> {
        let name = present_str(name).ok_or(ValidationError::Missing { field: "name" })?;
        check_name("name", &name)?;
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Partial cohort update; only present fields are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CohortPatch {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl CohortPatch {
    pub fn new(id: Option<i64>, name: Option<String>) -> Result<Self, ValidationError> {
        let id = present_id(id);
        let name = present_str(name);

        if id.is_none() && name.is_none() {
            return Err(ValidationError::Missing { field: "id or name" });
        }
        if let Some(name) = &name {
            check_name("name", name)?;
        }

        Ok(Self { id, name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cohort_requires_name() {
        assert_eq!(
            NewCohort::new(None).unwrap_err(),
            ValidationError::Missing { field: "name" }
        );
        assert!(matches!(
            NewCohort::new(Some(String::new())),
            Err(ValidationError::Missing { .. })
        ));
        assert_eq!(NewCohort::new(Some("WEBEU4".into())).unwrap().name(), "WEBEU4");
    }

    #[test]
    fn new_cohort_rejects_long_name() {
        let err = NewCohort::new(Some("x".repeat(129))).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 128, .. }));
    }

    #[test]
    fn patch_needs_one_field() {
        assert!(CohortPatch::new(None, None).is_err());
        assert!(CohortPatch::new(Some(0), Some(String::new())).is_err());

        let patch = CohortPatch::new(None, Some("WEBEU9".into())).unwrap();
        assert_eq!(patch.id, None);
        assert_eq!(patch.name.as_deref(), Some("WEBEU9"));

        let patch = CohortPatch::new(Some(7), None).unwrap();
        assert_eq!(patch.id, Some(7));
    }
}
