use super::*;
use test_utils::factory::submission::SubmissionFactory;

/// Tests the per-reflection submission overview.
///
/// Expected: Ok with submitted counts per reflection in sequence order, drafts excluded
#[tokio::test]
async fn counts_submissions_per_reflection() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, reflections) =
        factory::helpers::create_course_with_reflections(db, &[date(1, 1), date(1, 8)]).await?;
    factory::create_submission(db, reflections[1].id).await?;
    factory::create_submission(db, reflections[1].id).await?;
    SubmissionFactory::new(db, reflections[0].id)
        .draft()
        .build()
        .await?;

    let overview = CourseService::new(db).overview(course.id).await?;

    let counts: Vec<_> = overview
        .iter()
        .map(|o| (o.reflection_id, o.submissions_received))
        .collect();
    assert_eq!(counts, vec![(reflections[0].id, 0), (reflections[1].id, 2)]);
    assert_eq!(overview[0].display_name, "Reflection 01/01");

    Ok(())
}

/// Tests the overview of a missing course.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_course() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CourseService::new(db).overview(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
