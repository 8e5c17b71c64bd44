//! Route handlers organized by resource

pub mod health;
pub mod cohorts;
pub mod students;
