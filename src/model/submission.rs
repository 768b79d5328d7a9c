//! Domain models for student submissions.

use chrono::{DateTime, Utc};

/// A student's submission for one reflection.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// Unique identifier for the submission.
    pub id: i32,
    /// ID of the reflection this submission answers.
    pub reflection_id: i32,
    /// ID of the submitting student.
    pub student_id: i32,
    /// Submitted answers, JSON-encoded or plain text. `None` for an untouched draft.
    pub content: Option<String>,
    /// AI-generated feedback, possibly edited by the teacher.
    pub ai_feedback: Option<String>,
    /// Score assigned by the teacher.
    pub score: Option<f64>,
    /// Whether the feedback is shown to the student.
    pub display_feedback: bool,
    /// When the student submitted. `None` while still a draft.
    pub submitted_at: Option<DateTime<Utc>>,
    /// Timestamp when the submission row was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last change to the submission.
    pub updated_at: DateTime<Utc>,
}

impl Submission {
    /// Converts an entity model to a submission domain model at the repository boundary.
    pub fn from_entity(entity: entity::reflection_submission::Model) -> Self {
        Self {
            id: entity.id,
            reflection_id: entity.reflection_id,
            student_id: entity.student_id,
            content: entity.content,
            ai_feedback: entity.ai_feedback,
            score: entity.score,
            display_feedback: entity.display_feedback,
            submitted_at: entity.submitted_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Feedback the student may see: `None` until the teacher releases it.
    pub fn released_feedback(&self) -> Option<&str> {
        if self.display_feedback {
            self.ai_feedback.as_deref()
        } else {
            None
        }
    }
}

/// A submission as shown to the student who wrote it.
///
/// Score and unreleased feedback are left out.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentSubmission {
    pub id: i32,
    pub reflection_id: i32,
    pub content: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
    /// Feedback, present only once released by the teacher.
    pub feedback: Option<String>,
}

impl From<Submission> for StudentSubmission {
    fn from(submission: Submission) -> Self {
        Self {
            feedback: submission.released_feedback().map(str::to_string),
            id: submission.id,
            reflection_id: submission.reflection_id,
            content: submission.content,
            submitted_at: submission.submitted_at,
        }
    }
}

/// Parameters for a student submitting a reflection.
#[derive(Debug, Clone)]
pub struct SubmitReflectionParam {
    /// ID of the reflection being answered.
    pub reflection_id: i32,
    /// ID of the submitting student.
    pub student_id: i32,
    /// Submitted answers, JSON-encoded or plain text.
    pub content: String,
}

/// Parameters for writing a submission row, creating it if needed.
#[derive(Debug, Clone)]
pub struct UpsertSubmissionParam {
    /// ID of the reflection being answered.
    pub reflection_id: i32,
    /// ID of the submitting student.
    pub student_id: i32,
    /// Submitted answers.
    pub content: String,
    /// Feedback text to store alongside the submission.
    pub ai_feedback: String,
    /// Submission time.
    pub submitted_at: DateTime<Utc>,
}

/// Parameters for a teacher reviewing a submission.
///
/// All fields are optional - only provided fields are updated.
#[derive(Debug, Clone, Default)]
pub struct ReviewSubmissionParam {
    /// New score (outer Option indicates field presence, inner for nullable value).
    pub score: Option<Option<f64>>,
    /// Whether the feedback should be shown to the student.
    pub display_feedback: Option<bool>,
    /// Replacement feedback text.
    pub ai_feedback: Option<String>,
}
