//! Domain models for reflection instances.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

/// Display name of a reflection starting on `start_date`, e.g. `Reflection 11/01`.
pub fn display_name_for(start_date: NaiveDate) -> String {
    format!("Reflection {}", start_date.format("%d/%m"))
}

/// A stored reflection instance.
///
/// Within a course, `start_date` identifies the instance for reconciliation.
#[derive(Debug, Clone, PartialEq)]
pub struct Reflection {
    /// Unique identifier assigned by storage.
    pub id: i32,
    /// ID of the course this reflection belongs to.
    pub course_id: i32,
    /// 1-based position in start date order within the course.
    pub sequence_number: i32,
    /// Name derived from the start date.
    pub display_name: String,
    /// Calendar date the reflection opens.
    pub start_date: NaiveDate,
    /// Instant after which submissions are refused.
    pub due_date: DateTime<Utc>,
    /// Copy of the course template at generation or last refresh.
    pub content_template: Option<Value>,
    /// Timestamp when the reflection was created.
    pub created_at: DateTime<Utc>,
}

impl Reflection {
    /// Converts an entity model to a reflection domain model at the repository boundary.
    pub fn from_entity(entity: entity::reflection::Model) -> Self {
        Self {
            id: entity.id,
            course_id: entity.course_id,
            sequence_number: entity.sequence_number,
            display_name: entity.display_name,
            start_date: entity.start_date,
            due_date: entity.due_date,
            content_template: entity.content_template,
            created_at: entity.created_at,
        }
    }
}

/// A reflection instance that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReflection {
    /// ID of the course the reflection belongs to.
    pub course_id: i32,
    /// 1-based position in start date order within the course.
    pub sequence_number: i32,
    /// Name derived from the start date.
    pub display_name: String,
    /// Calendar date the reflection opens.
    pub start_date: NaiveDate,
    /// Instant after which submissions are refused.
    pub due_date: DateTime<Utc>,
    /// Copy of the course template.
    pub content_template: Option<Value>,
}

impl NewReflection {
    /// Creates a new reflection whose display name is derived from `start_date`.
    pub fn new(
        course_id: i32,
        sequence_number: i32,
        start_date: NaiveDate,
        due_date: DateTime<Utc>,
        content_template: Option<Value>,
    ) -> Self {
        Self {
            course_id,
            sequence_number,
            display_name: display_name_for(start_date),
            start_date,
            due_date,
            content_template,
        }
    }
}
