//! Domain models for courses and their configuration.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

/// Course with its reflection schedule configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    /// Unique identifier for the course.
    pub id: i32,
    /// Course display name.
    pub name: String,
    /// Optional institutional course code.
    pub course_code: Option<String>,
    /// Lifecycle status, `active` or `archived`.
    pub status: String,
    /// Reflection framework chosen by the teacher (e.g. "Bloom's Taxonomy").
    pub framework: Option<String>,
    /// First day of the course.
    pub start_date: Option<NaiveDate>,
    /// Last day of the course, inclusive.
    pub end_date: Option<NaiveDate>,
    /// Days between a reflection's start date and its due date.
    pub reflection_due_days: Option<i32>,
    /// Interval-mode recurrence in days.
    pub recurrence_days: Option<i32>,
    /// Comma-separated weekday selection for weekday mode.
    pub selected_days: Option<String>,
    /// Reflection content template.
    pub custom_structure: Option<Value>,
    /// Timestamp when the course was created.
    pub created_at: DateTime<Utc>,
}

impl Course {
    /// Converts an entity model to a course domain model at the repository boundary.
    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            course_code: entity.course_code,
            status: entity.status,
            framework: entity.framework,
            start_date: entity.start_date,
            end_date: entity.end_date,
            reflection_due_days: entity.reflection_due_days,
            recurrence_days: entity.recurrence_days,
            selected_days: entity.selected_days,
            custom_structure: entity.custom_structure,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a new course.
#[derive(Debug, Clone)]
pub struct CreateCourseParam {
    /// Course display name.
    pub name: String,
    /// Optional institutional course code.
    pub course_code: Option<String>,
}

/// Parameters for configuring a course's reflection schedule.
///
/// All fields are optional - only provided fields are updated. For nullable columns
/// the outer Option indicates field presence and the inner Option the new value.
#[derive(Debug, Clone, Default)]
pub struct ConfigureCourseParam {
    /// New reflection framework.
    pub framework: Option<Option<String>>,
    /// New course start date.
    pub start_date: Option<Option<NaiveDate>>,
    /// New course end date.
    pub end_date: Option<Option<NaiveDate>>,
    /// New due offset in days.
    pub reflection_due_days: Option<Option<i32>>,
    /// New interval-mode recurrence in days.
    pub recurrence_days: Option<Option<i32>>,
    /// New weekday selection, stored comma-joined. `Some(None)` returns the course to
    /// interval mode.
    pub selected_days: Option<Option<Vec<String>>>,
    /// New reflection content template.
    pub custom_structure: Option<Option<Value>>,
}

/// Submission statistics for one reflection of a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectionOverview {
    /// ID of the reflection.
    pub reflection_id: i32,
    /// Display name of the reflection.
    pub display_name: String,
    /// Number of submissions that have been submitted.
    pub submissions_received: u64,
}
