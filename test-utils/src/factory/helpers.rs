//! Shared helper utilities for factory methods.
//!
//! Provides the id counter used for unique default values and convenience methods
//! for creating entities together with their dependencies.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a course with one reflection per supplied start date.
///
/// Reflections are numbered in the order the dates are given, so callers should pass
/// dates in ascending order to keep sequence numbers consistent with start dates.
///
/// # Arguments
/// - `db` - Database connection
/// - `dates` - Start dates of the reflections to create
///
/// # Returns
/// - `Ok((course, reflections))` - Created course and its reflections
/// - `Err(DbErr)` - Database error during creation
pub async fn create_course_with_reflections(
    db: &DatabaseConnection,
    dates: &[NaiveDate],
) -> Result<(entity::course::Model, Vec<entity::reflection::Model>), DbErr> {
    let course = crate::factory::course::create_course(db).await?;

    let mut reflections = Vec::with_capacity(dates.len());
    for (index, date) in dates.iter().enumerate() {
        let reflection = crate::factory::reflection::ReflectionFactory::new(db, course.id, *date)
            .sequence_number(index as i32 + 1)
            .build()
            .await?;
        reflections.push(reflection);
    }

    Ok((course, reflections))
}
