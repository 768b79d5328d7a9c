use sea_orm::DatabaseConnection;

use crate::{
    data::{
        course::CourseRepository, reflection::ReflectionRepository,
        submission::SubmissionRepository,
    },
    error::AppError,
    model::{
        course::{ConfigureCourseParam, Course, CreateCourseParam, ReflectionOverview},
        reflection::Reflection,
    },
    service::schedule::{plan::ReconcileOutcome, ScheduleService},
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new course. The course has no reflections until it is configured.
    pub async fn create(&self, param: CreateCourseParam) -> Result<Course, AppError> {
        let repo = CourseRepository::new(self.db);

        Ok(repo.create(param).await?)
    }

    /// Gets a course by ID.
    ///
    /// # Returns
    /// - `Ok(Course)` - Course found
    /// - `Err(AppError::NotFound)` - No course with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get(&self, course_id: i32) -> Result<Course, AppError> {
        let repo = CourseRepository::new(self.db);

        repo.get_by_id(course_id)
            .await?
            .ok_or_else(|| course_not_found(course_id))
    }

    /// Updates a course's schedule configuration and regenerates its reflections.
    ///
    /// The configuration write is committed before regeneration runs. If the course
    /// already has submissions, regeneration keeps the existing reflections and only
    /// refreshes their content templates.
    ///
    /// # Arguments
    /// - `course_id` - ID of the course to configure
    /// - `param` - Configuration fields to update
    ///
    /// # Returns
    /// - `Ok(ReconcileOutcome)` - Counts of the regeneration writes
    /// - `Err(AppError::NotFound)` - No course with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn configure(
        &self,
        course_id: i32,
        param: ConfigureCourseParam,
    ) -> Result<ReconcileOutcome, AppError> {
        let repo = CourseRepository::new(self.db);

        repo.configure(course_id, param)
            .await?
            .ok_or_else(|| course_not_found(course_id))?;

        ScheduleService::with_db(self.db).regenerate(course_id).await
    }

    /// Gets a course's reflections in sequence order.
    pub async fn reflections(&self, course_id: i32) -> Result<Vec<Reflection>, AppError> {
        self.get(course_id).await?;

        Ok(ReflectionRepository::new(self.db)
            .list_by_sequence(course_id)
            .await?)
    }

    /// Gets the number of submitted entries per reflection of a course.
    ///
    /// # Returns
    /// - `Ok(Vec<ReflectionOverview>)` - One entry per reflection in sequence order
    /// - `Err(AppError::NotFound)` - No course with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn overview(&self, course_id: i32) -> Result<Vec<ReflectionOverview>, AppError> {
        let submission_repo = SubmissionRepository::new(self.db);

        let mut overview = Vec::new();
        for reflection in self.reflections(course_id).await? {
            let submissions_received = submission_repo
                .count_submitted_by_reflection(reflection.id)
                .await?;

            overview.push(ReflectionOverview {
                reflection_id: reflection.id,
                display_name: reflection.display_name,
                submissions_received,
            });
        }

        Ok(overview)
    }
}

fn course_not_found(course_id: i32) -> AppError {
    AppError::NotFound(format!("Course {} not found", course_id))
}
