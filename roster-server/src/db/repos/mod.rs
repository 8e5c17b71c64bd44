//! Repository implementations for database access
//!
//! Each repository borrows the pool and issues one statement per method.

pub mod cohorts;
pub mod students;

pub use cohorts::CohortRepo;
pub use students::StudentRepo;
