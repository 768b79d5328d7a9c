//! Storage collaborators of the schedule service.
//!
//! The repositories in [`crate::data`] implement these traits against the database;
//! tests may substitute in-memory implementations.

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::{
    model::{reflection::Reflection, schedule::CourseSchedule},
    service::schedule::plan::ReconcilePlan,
};

/// Read access to a course's schedule configuration.
#[async_trait]
pub trait CourseConfigStore: Send + Sync {
    /// Returns the schedule of `course_id`, or `None` if the course does not exist.
    async fn read(&self, course_id: i32) -> Result<Option<CourseSchedule>, DbErr>;
}

/// Storage of reflection instances.
#[async_trait]
pub trait ReflectionStore: Send + Sync {
    /// Returns the reflections of `course_id` ordered by start date.
    async fn list(&self, course_id: i32) -> Result<Vec<Reflection>, DbErr>;

    /// Applies every write of `plan` in a single transaction.
    ///
    /// Either all writes are applied or, on error, none are. The plan's protection
    /// classification is rechecked by the writes themselves: if a reflection the plan
    /// deletes or moves has gained a submission since it was classified, the
    /// whole plan is rejected.
    async fn apply(&self, plan: &ReconcilePlan) -> Result<(), DbErr>;
}

/// Submission lookups used to classify reflections.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Whether `reflection_id` has at least one submission with non-empty content.
    async fn has_submission(&self, reflection_id: i32) -> Result<bool, DbErr>;
}
