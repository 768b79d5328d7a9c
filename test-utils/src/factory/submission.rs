//! Submission factory for creating test reflection submissions.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test submissions.
///
/// Defaults to a submitted entry with non-empty content, which protects its
/// reflection. Use `draft()` for a row that was opened but never written.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::submission::SubmissionFactory;
///
/// let draft = SubmissionFactory::new(&db, reflection.id).draft().build().await?;
/// ```
pub struct SubmissionFactory<'a> {
    db: &'a DatabaseConnection,
    reflection_id: i32,
    student_id: i32,
    content: Option<String>,
    submitted_at: Option<DateTime<Utc>>,
}

impl<'a> SubmissionFactory<'a> {
    /// Creates a new SubmissionFactory with default values.
    ///
    /// Defaults:
    /// - student_id: auto-incremented
    /// - content: `Some("My reflection {id}")`
    /// - submitted_at: now
    pub fn new(db: &'a DatabaseConnection, reflection_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            reflection_id,
            student_id: id as i32,
            content: Some(format!("My reflection {}", id)),
            submitted_at: Some(Utc::now()),
        }
    }

    /// Sets the submitting student's id.
    pub fn student_id(mut self, student_id: i32) -> Self {
        self.student_id = student_id;
        self
    }

    /// Sets the submission content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Makes the submission an unsubmitted draft with no content.
    pub fn draft(mut self) -> Self {
        self.content = None;
        self.submitted_at = None;
        self
    }

    /// Builds and inserts the submission entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reflection_submission::Model)` - Created submission entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reflection_submission::Model, DbErr> {
        let now = Utc::now();
        entity::reflection_submission::ActiveModel {
            id: ActiveValue::NotSet,
            reflection_id: ActiveValue::Set(self.reflection_id),
            student_id: ActiveValue::Set(self.student_id),
            content: ActiveValue::Set(self.content),
            ai_feedback: ActiveValue::Set(None),
            score: ActiveValue::Set(None),
            display_feedback: ActiveValue::Set(false),
            submitted_at: ActiveValue::Set(self.submitted_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a submitted, non-empty submission for the given reflection.
pub async fn create_submission(
    db: &DatabaseConnection,
    reflection_id: i32,
) -> Result<entity::reflection_submission::Model, DbErr> {
    SubmissionFactory::new(db, reflection_id).build().await
}
