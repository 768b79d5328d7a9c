//! Reflection factory for creating test reflection instances.

use chrono::{Days, NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::Value;

/// Factory for creating test reflections with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::reflection::ReflectionFactory;
///
/// let reflection = ReflectionFactory::new(&db, course.id, date)
///     .sequence_number(2)
///     .due_in_days(5)
///     .build()
///     .await?;
/// ```
pub struct ReflectionFactory<'a> {
    db: &'a DatabaseConnection,
    course_id: i32,
    start_date: NaiveDate,
    sequence_number: i32,
    due_in_days: u64,
    content_template: Option<Value>,
}

impl<'a> ReflectionFactory<'a> {
    /// Creates a new ReflectionFactory with default values.
    ///
    /// Defaults:
    /// - sequence_number: `1`
    /// - due date: 7 days after `start_date`, midnight UTC
    /// - display_name: `"Reflection DD/MM"` derived from `start_date`
    /// - content_template: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `course_id` - Course the reflection belongs to
    /// - `start_date` - Calendar date the reflection opens
    pub fn new(db: &'a DatabaseConnection, course_id: i32, start_date: NaiveDate) -> Self {
        Self {
            db,
            course_id,
            start_date,
            sequence_number: 1,
            due_in_days: 7,
            content_template: None,
        }
    }

    /// Sets the sequence number.
    pub fn sequence_number(mut self, number: i32) -> Self {
        self.sequence_number = number;
        self
    }

    /// Sets the number of days between start and due date.
    pub fn due_in_days(mut self, days: u64) -> Self {
        self.due_in_days = days;
        self
    }

    /// Sets the content template.
    pub fn content_template(mut self, template: Value) -> Self {
        self.content_template = Some(template);
        self
    }

    /// Builds and inserts the reflection entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reflection::Model)` - Created reflection entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reflection::Model, DbErr> {
        let due_date = self
            .start_date
            .checked_add_days(Days::new(self.due_in_days))
            .ok_or_else(|| DbErr::Custom("due date out of range".to_string()))?
            .and_time(NaiveTime::MIN)
            .and_utc();

        entity::reflection::ActiveModel {
            id: ActiveValue::NotSet,
            course_id: ActiveValue::Set(self.course_id),
            sequence_number: ActiveValue::Set(self.sequence_number),
            display_name: ActiveValue::Set(format!(
                "Reflection {}",
                self.start_date.format("%d/%m")
            )),
            start_date: ActiveValue::Set(self.start_date),
            due_date: ActiveValue::Set(due_date),
            content_template: ActiveValue::Set(self.content_template),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reflection with default values for the given course and start date.
///
/// Shorthand for `ReflectionFactory::new(db, course_id, start_date).build().await`.
pub async fn create_reflection(
    db: &DatabaseConnection,
    course_id: i32,
    start_date: NaiveDate,
) -> Result<entity::reflection::Model, DbErr> {
    ReflectionFactory::new(db, course_id, start_date).build().await
}
