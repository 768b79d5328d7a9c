//! Reflection journal backend.
//!
//! Teachers configure courses with a recurring reflection schedule; students submit
//! entries and receive AI-generated feedback. The heart of the crate is the schedule
//! reconciler in [`service::schedule`], which keeps each course's reflection instances
//! in line with its configuration without ever discarding an instance a student has
//! already written into.
//!
//! # Architecture
//!
//! The crate follows a layered architecture:
//!
//! - **Service Layer** (`service/`) - Schedule reconciliation, course configuration,
//!   submission workflow and AI feedback
//! - **Data Layer** (`data/`) - SeaORM repositories implementing the store traits
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Startup** (`startup`) - Database connection, migrations, logging and HTTP client
//!
//! # Concurrency
//!
//! Every service call runs to completion within the awaited future. Reconciliations of
//! the *same course* are not safe against each other and must be serialized by the
//! caller; the reconciler does not arbitrate between them.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
