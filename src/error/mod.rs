//! Error types.
//!
//! `AppError` is the top-level error returned by services. Repository failures arrive
//! as `sea_orm::DbErr` and surface unchanged through the `DbErr` variant; a failed
//! reconciliation write always rolls back, so this variant never implies partial
//! state. Feedback failures have their own type and are never converted into
//! `AppError`: the feedback service substitutes a fallback text instead.

pub mod config;
pub mod feedback;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Covers every persistence failure, including a rolled back reconciliation
    /// write. The stored reflection set is unchanged when this is returned from a
    /// reconciliation.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),

    /// The reflection's due date has passed and it no longer accepts submissions.
    #[error("Submission deadline for reflection {reflection_id} passed at {due_date}")]
    SubmissionClosed {
        /// The reflection the submission targeted
        reflection_id: i32,
        /// The due date that has passed
        due_date: DateTime<Utc>,
    },

    /// Internal error with custom message.
    ///
    /// # Fields
    /// - Detailed error message for logging
    #[error("{0}")]
    InternalError(String),
}
