use crate::{
    data::submission::SubmissionRepository,
    model::submission::{ReviewSubmissionParam, UpsertSubmissionParam},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{
    builder::TestBuilder,
    factory::{self, submission::SubmissionFactory},
};

mod count_submitted_by_reflection;

/// Creates a course with one reflection and returns the reflection's ID.
async fn reflection_id(db: &DatabaseConnection) -> Result<i32, DbErr> {
    let (_, reflections) = factory::helpers::create_course_with_reflections(
        db,
        &[NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()],
    )
    .await?;

    Ok(reflections[0].id)
}
