//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and used
//! throughout the service layer, keeping business logic separate from database
//! concerns.

pub mod course;
pub mod reflection;
pub mod schedule;
pub mod submission;
