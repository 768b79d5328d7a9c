//! Reflection schedule reconciliation.
//!
//! `ScheduleService` loads a course's schedule and its current reflections, asks the
//! planner for the writes needed, and has the reflection store apply them
//! atomically. Reflections that already have submissions are never deleted and
//! never have their dates changed.
//!
//! Classification happens before the write transaction opens. A submission recorded
//! in between makes the store reject the plan, leaving the course unchanged, and
//! the caller may retry. Concurrent reconciliations of the same course are not
//! arbitrated here and must be serialized by the caller.

pub mod dates;
pub mod plan;
pub mod store;

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use tracing::{debug, info};

use crate::{
    data::{
        course::CourseRepository, reflection::ReflectionRepository,
        submission::SubmissionRepository,
    },
    error::AppError,
    model::schedule::CourseSchedule,
    service::schedule::{
        plan::{plan_full_regeneration, plan_selection, ExistingReflection, ReconcileOutcome, ReconcilePlan},
        store::{CourseConfigStore, ReflectionStore, SubmissionStore},
    },
};

pub struct ScheduleService<C, R, S> {
    courses: C,
    reflections: R,
    submissions: S,
}

impl<'a>
    ScheduleService<CourseRepository<'a>, ReflectionRepository<'a>, SubmissionRepository<'a>>
{
    /// Creates a schedule service backed by the database repositories.
    pub fn with_db(db: &'a DatabaseConnection) -> Self {
        Self::new(
            CourseRepository::new(db),
            ReflectionRepository::new(db),
            SubmissionRepository::new(db),
        )
    }
}

impl<C, R, S> ScheduleService<C, R, S>
where
    C: CourseConfigStore,
    R: ReflectionStore,
    S: SubmissionStore,
{
    pub fn new(courses: C, reflections: R, submissions: S) -> Self {
        Self {
            courses,
            reflections,
            submissions,
        }
    }

    /// Regenerates all reflections of a course from its current configuration.
    ///
    /// If any reflection of the course has a submission, the existing set is kept
    /// and only its content templates are refreshed.
    ///
    /// # Arguments
    /// - `course_id` - ID of the course to regenerate
    ///
    /// # Returns
    /// - `Ok(ReconcileOutcome)` - Counts of the applied writes
    /// - `Err(AppError::NotFound)` - Course does not exist
    /// - `Err(AppError::DbErr)` - Database error; stored reflections are unchanged
    pub async fn regenerate(&self, course_id: i32) -> Result<ReconcileOutcome, AppError> {
        let (schedule, existing) = self.load(course_id).await?;
        let plan = plan_full_regeneration(&schedule, existing);

        self.apply(plan).await
    }

    /// Reconciles a course's reflections to an explicit set of start dates.
    ///
    /// Reflections with submissions outside `dates` are kept.
    ///
    /// # Arguments
    /// - `course_id` - ID of the course
    /// - `dates` - Selected start dates, in any order and possibly repeated
    ///
    /// # Returns
    /// - `Ok(ReconcileOutcome)` - Counts of the applied writes, all zero when the
    ///   course already matches the selection
    /// - `Err(AppError::NotFound)` - Course does not exist
    /// - `Err(AppError::DbErr)` - Database error; stored reflections are unchanged
    pub async fn select_dates(
        &self,
        course_id: i32,
        dates: &[NaiveDate],
    ) -> Result<ReconcileOutcome, AppError> {
        let (schedule, existing) = self.load(course_id).await?;
        let plan = plan_selection(&schedule, dates, existing);

        self.apply(plan).await
    }

    async fn load(
        &self,
        course_id: i32,
    ) -> Result<(CourseSchedule, Vec<ExistingReflection>), AppError> {
        let schedule = self
            .courses
            .read(course_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Course {} not found", course_id)))?;

        let reflections = self.reflections.list(course_id).await?;
        let mut existing = Vec::with_capacity(reflections.len());
        for reflection in reflections {
            let has_submission = self.submissions.has_submission(reflection.id).await?;
            existing.push(ExistingReflection::classify(reflection, has_submission));
        }

        Ok((schedule, existing))
    }

    async fn apply(&self, plan: ReconcilePlan) -> Result<ReconcileOutcome, AppError> {
        let outcome = plan.outcome();

        debug!(
            "Reconcile plan for course {}: {:?}, {} inserts, {} updates, {} deletions",
            plan.course_id(),
            plan.kind(),
            outcome.created,
            outcome.updated,
            outcome.deleted
        );

        self.reflections.apply(&plan).await?;

        info!(
            "Reconciled reflections for course {}: {} created, {} updated, {} deleted, {} protected",
            plan.course_id(),
            outcome.created,
            outcome.updated,
            outcome.deleted,
            outcome.protected
        );

        Ok(outcome)
    }
}
