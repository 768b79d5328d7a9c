//! Course factory for creating test course entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::Value;

/// Factory for creating test courses with customizable schedule configuration.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::course::CourseFactory;
///
/// let course = CourseFactory::new(&db)
///     .date_range(start, end)
///     .selected_days("Mon,Wed")
///     .build()
///     .await?;
/// ```
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    course_code: Option<String>,
    framework: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    reflection_due_days: Option<i32>,
    recurrence_days: Option<i32>,
    selected_days: Option<String>,
    custom_structure: Option<Value>,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Course {id}"` where id is auto-incremented
    /// - course_code: `Some("C{id}")`
    /// - every schedule field unset (an unconfigured course)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Course {}", id),
            course_code: Some(format!("C{}", id)),
            framework: None,
            start_date: None,
            end_date: None,
            reflection_due_days: None,
            recurrence_days: None,
            selected_days: None,
            custom_structure: None,
        }
    }

    /// Sets the course name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the reflection framework.
    pub fn framework(mut self, framework: impl Into<String>) -> Self {
        self.framework = Some(framework.into());
        self
    }

    /// Sets the inclusive course date range.
    pub fn date_range(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self.end_date = Some(end_date);
        self
    }

    /// Sets the number of days after a reflection starts before it is due.
    pub fn reflection_due_days(mut self, days: i32) -> Self {
        self.reflection_due_days = Some(days);
        self
    }

    /// Sets the interval-mode recurrence in days.
    pub fn recurrence_days(mut self, days: i32) -> Self {
        self.recurrence_days = Some(days);
        self
    }

    /// Sets the comma-separated weekday selection.
    pub fn selected_days(mut self, days: impl Into<String>) -> Self {
        self.selected_days = Some(days.into());
        self
    }

    /// Sets the reflection content template.
    pub fn custom_structure(mut self, structure: Value) -> Self {
        self.custom_structure = Some(structure);
        self
    }

    /// Builds and inserts the course entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::course::Model)` - Created course entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            course_code: ActiveValue::Set(self.course_code),
            status: ActiveValue::Set("active".to_string()),
            framework: ActiveValue::Set(self.framework),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            reflection_due_days: ActiveValue::Set(self.reflection_due_days),
            recurrence_days: ActiveValue::Set(self.recurrence_days),
            selected_days: ActiveValue::Set(self.selected_days),
            custom_structure: ActiveValue::Set(self.custom_structure),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unconfigured course with default values.
///
/// Shorthand for `CourseFactory::new(db).build().await`.
pub async fn create_course(db: &DatabaseConnection) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db).build().await
}
