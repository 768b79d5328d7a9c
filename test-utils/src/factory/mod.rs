//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let course = factory::create_course(&db).await?;
//!     let reflection = factory::create_reflection(&db, course.id, date).await?;
//!     let submission = factory::create_submission(&db, reflection.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let course = factory::course::CourseFactory::new(&db)
//!     .date_range(start, end)
//!     .recurrence_days(10)
//!     .reflection_due_days(5)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `course` - Create course entities with schedule configuration
//! - `reflection` - Create reflection instances
//! - `submission` - Create reflection submissions (drafts or submitted)
//! - `helpers` - Unique id counter and multi-entity helpers

pub mod course;
pub mod helpers;
pub mod reflection;
pub mod submission;

pub use course::create_course;
pub use reflection::create_reflection;
pub use submission::create_submission;
