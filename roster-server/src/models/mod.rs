//! Domain models with validation at construction
//!
//! Request bodies are deserialized into typed shapes, then turned into these
//! types. Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod cohort;
pub mod student;

pub use validation::{ValidationError, MAX_NAME_LEN};
pub use cohort::{Cohort, CohortPatch, NewCohort};
pub use student::{NewStudent, Student, StudentDetail, StudentPatch};
