use async_trait::async_trait;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::submission::{ReviewSubmissionParam, Submission, UpsertSubmissionParam},
    service::schedule::store::SubmissionStore,
};

pub struct SubmissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubmissionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a reflection has at least one submission with content.
    ///
    /// Drafts without content, or with an empty string, are not counted.
    ///
    /// # Arguments
    /// - `reflection_id` - ID of the reflection
    ///
    /// # Returns
    /// - `Ok(true)` - A non-empty submission exists
    /// - `Ok(false)` - No submission, or only empty drafts
    /// - `Err(DbErr)` - Database error during query
    pub async fn has_submission(&self, reflection_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ReflectionSubmission::find()
            .filter(entity::reflection_submission::Column::ReflectionId.eq(reflection_id))
            .filter(entity::reflection_submission::Column::Content.is_not_null())
            .filter(entity::reflection_submission::Column::Content.ne(""))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds a student's submission for a reflection.
    ///
    /// # Returns
    /// - `Ok(Some(Submission))` - The student has a submission row for the reflection
    /// - `Ok(None)` - No row exists yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_reflection_and_student(
        &self,
        reflection_id: i32,
        student_id: i32,
    ) -> Result<Option<Submission>, DbErr> {
        let entity = entity::prelude::ReflectionSubmission::find()
            .filter(entity::reflection_submission::Column::ReflectionId.eq(reflection_id))
            .filter(entity::reflection_submission::Column::StudentId.eq(student_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Submission::from_entity))
    }

    /// Creates or overwrites a student's submission for a reflection.
    ///
    /// On conflict with an existing row for the same reflection and student, the
    /// content, feedback and timestamps are replaced while score and feedback
    /// visibility are kept.
    ///
    /// # Returns
    /// - `Ok(Submission)` - The stored submission
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, param: UpsertSubmissionParam) -> Result<Submission, DbErr> {
        let now = chrono::Utc::now();

        let entity = entity::prelude::ReflectionSubmission::insert(
            entity::reflection_submission::ActiveModel {
                reflection_id: ActiveValue::Set(param.reflection_id),
                student_id: ActiveValue::Set(param.student_id),
                content: ActiveValue::Set(Some(param.content)),
                ai_feedback: ActiveValue::Set(Some(param.ai_feedback)),
                score: ActiveValue::Set(None),
                display_feedback: ActiveValue::Set(false),
                submitted_at: ActiveValue::Set(Some(param.submitted_at)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .on_conflict(
            OnConflict::columns([
                entity::reflection_submission::Column::ReflectionId,
                entity::reflection_submission::Column::StudentId,
            ])
            .update_columns([
                entity::reflection_submission::Column::Content,
                entity::reflection_submission::Column::AiFeedback,
                entity::reflection_submission::Column::SubmittedAt,
                entity::reflection_submission::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Submission::from_entity(entity))
    }

    /// Applies a teacher's review to a submission.
    ///
    /// # Returns
    /// - `Ok(Some(Submission))` - Updated submission
    /// - `Ok(None)` - No submission with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn review(
        &self,
        id: i32,
        param: ReviewSubmissionParam,
    ) -> Result<Option<Submission>, DbErr> {
        let Some(submission) = entity::prelude::ReflectionSubmission::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::reflection_submission::ActiveModel = submission.into();

        if let Some(score) = param.score {
            active_model.score = ActiveValue::Set(score);
        }
        if let Some(display_feedback) = param.display_feedback {
            active_model.display_feedback = ActiveValue::Set(display_feedback);
        }
        if let Some(ai_feedback) = param.ai_feedback {
            active_model.ai_feedback = ActiveValue::Set(Some(ai_feedback));
        }
        active_model.updated_at = ActiveValue::Set(chrono::Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Submission::from_entity(entity)))
    }

    /// Gets all submissions of a reflection ordered by student ID.
    pub async fn get_by_reflection(&self, reflection_id: i32) -> Result<Vec<Submission>, DbErr> {
        let entities = entity::prelude::ReflectionSubmission::find()
            .filter(entity::reflection_submission::Column::ReflectionId.eq(reflection_id))
            .order_by_asc(entity::reflection_submission::Column::StudentId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Submission::from_entity).collect())
    }

    /// Counts the submissions of a reflection that have been submitted.
    pub async fn count_submitted_by_reflection(&self, reflection_id: i32) -> Result<u64, DbErr> {
        entity::prelude::ReflectionSubmission::find()
            .filter(entity::reflection_submission::Column::ReflectionId.eq(reflection_id))
            .filter(entity::reflection_submission::Column::SubmittedAt.is_not_null())
            .count(self.db)
            .await
    }
}

#[async_trait]
impl SubmissionStore for SubmissionRepository<'_> {
    async fn has_submission(&self, reflection_id: i32) -> Result<bool, DbErr> {
        SubmissionRepository::has_submission(self, reflection_id).await
    }
}
