use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        course::CourseRepository, reflection::ReflectionRepository,
        submission::SubmissionRepository,
    },
    error::AppError,
    model::submission::{
        ReviewSubmissionParam, StudentSubmission, SubmitReflectionParam, Submission,
        UpsertSubmissionParam,
    },
    service::feedback::{FeedbackProvider, FeedbackService},
};

pub struct SubmissionService<'a, P: ?Sized> {
    db: &'a DatabaseConnection,
    feedback: &'a P,
}

impl<'a, P: FeedbackProvider + ?Sized> SubmissionService<'a, P> {
    pub fn new(db: &'a DatabaseConnection, feedback: &'a P) -> Self {
        Self { db, feedback }
    }

    /// Records a student's submission together with AI feedback.
    ///
    /// A reflection accepts submissions until its due date. Feedback failures never
    /// prevent the submission from being stored; the fallback text is stored instead.
    /// Submitting again overwrites the student's previous content and feedback.
    ///
    /// # Arguments
    /// - `param` - Reflection, student and submitted content
    /// - `now` - Submission time, compared against the due date
    ///
    /// # Returns
    /// - `Ok(Submission)` - Stored submission
    /// - `Err(AppError::BadRequest)` - Content is blank
    /// - `Err(AppError::NotFound)` - Reflection does not exist
    /// - `Err(AppError::SubmissionClosed)` - Due date has passed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn submit(
        &self,
        param: SubmitReflectionParam,
        now: DateTime<Utc>,
    ) -> Result<Submission, AppError> {
        if param.content.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Submission content must not be empty".to_string(),
            ));
        }

        let reflection = ReflectionRepository::new(self.db)
            .get_by_id(param.reflection_id)
            .await?
            .ok_or_else(|| reflection_not_found(param.reflection_id))?;

        if reflection.due_date < now {
            return Err(AppError::SubmissionClosed {
                reflection_id: reflection.id,
                due_date: reflection.due_date,
            });
        }

        let framework = CourseRepository::new(self.db)
            .get_by_id(reflection.course_id)
            .await?
            .and_then(|course| course.framework);

        let ai_feedback = FeedbackService::new(self.feedback)
            .generate(
                &param.content,
                framework.as_deref(),
                reflection.content_template.as_ref(),
            )
            .await;

        let submission = SubmissionRepository::new(self.db)
            .upsert(UpsertSubmissionParam {
                reflection_id: reflection.id,
                student_id: param.student_id,
                content: param.content,
                ai_feedback,
                submitted_at: now,
            })
            .await?;

        tracing::debug!(
            "Student {} submitted reflection {}",
            submission.student_id,
            submission.reflection_id
        );

        Ok(submission)
    }

    /// Applies a teacher's review to a submission.
    ///
    /// # Returns
    /// - `Ok(Submission)` - Updated submission
    /// - `Err(AppError::NotFound)` - No submission with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn review(
        &self,
        submission_id: i32,
        param: ReviewSubmissionParam,
    ) -> Result<Submission, AppError> {
        SubmissionRepository::new(self.db)
            .review(submission_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Submission {} not found", submission_id)))
    }

    /// Gets a student's own submission of a reflection.
    ///
    /// AI feedback is only included after the teacher has released it through
    /// [`review`](Self::review).
    ///
    /// # Returns
    /// - `Ok(Some(StudentSubmission))` - The student's submission
    /// - `Ok(None)` - The student has not submitted yet
    /// - `Err(AppError::NotFound)` - Reflection does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn for_student(
        &self,
        reflection_id: i32,
        student_id: i32,
    ) -> Result<Option<StudentSubmission>, AppError> {
        ReflectionRepository::new(self.db)
            .get_by_id(reflection_id)
            .await?
            .ok_or_else(|| reflection_not_found(reflection_id))?;

        let submission = SubmissionRepository::new(self.db)
            .find_by_reflection_and_student(reflection_id, student_id)
            .await?;

        Ok(submission.map(StudentSubmission::from))
    }

    /// Gets all submissions of a reflection.
    pub async fn list_for_reflection(
        &self,
        reflection_id: i32,
    ) -> Result<Vec<Submission>, AppError> {
        ReflectionRepository::new(self.db)
            .get_by_id(reflection_id)
            .await?
            .ok_or_else(|| reflection_not_found(reflection_id))?;

        Ok(SubmissionRepository::new(self.db)
            .get_by_reflection(reflection_id)
            .await?)
    }
}

fn reflection_not_found(reflection_id: i32) -> AppError {
    AppError::NotFound(format!("Reflection {} not found", reflection_id))
}
