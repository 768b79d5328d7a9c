use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Course, Reflection};
///
/// let test = TestBuilder::new()
///     .with_table(Course)
///     .with_table(Reflection)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after all tables are created.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index to the test database schema.
    ///
    /// Entity-derived tables carry no composite unique constraints, so upserts relying on
    /// them need the matching index added here.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds all tables required for schedule and submission operations.
    ///
    /// Adds, in dependency order:
    /// - Course
    /// - Reflection, unique on (course_id, start_date)
    /// - ReflectionSubmission, unique on (reflection_id, student_id)
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_schedule_tables(self) -> Self {
        self.with_table(Course)
            .with_table(Reflection)
            .with_table(ReflectionSubmission)
            .with_index(
                Index::create()
                    .name("idx_reflection_course_start_date")
                    .table(Reflection)
                    .col(entity::reflection::Column::CourseId)
                    .col(entity::reflection::Column::StartDate)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("idx_reflection_submission_unique")
                    .table(ReflectionSubmission)
                    .col(entity::reflection_submission::Column::ReflectionId)
                    .col(entity::reflection_submission::Column::StudentId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
