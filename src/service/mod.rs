//! Service layer for business logic and orchestration.
//!
//! Services sit between callers (the CLI) and the data layer. They implement the
//! business rules, coordinate repository calls and external providers, and work
//! with domain models rather than entity models.

pub mod course;
pub mod feedback;
pub mod schedule;
pub mod submission;

#[cfg(test)]
mod test;
