use super::*;
use crate::service::schedule::plan::ReconcileOutcome;
use serde_json::json;

/// Tests regenerating the January course from scratch.
///
/// Expected: Ok with reflections on 01-01, 01-11, 01-21 and 01-31, due five days
/// later at midnight UTC and numbered 1 to 4
#[tokio::test]
async fn generates_interval_schedule() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = january_course(db).await?;

    let outcome = ScheduleService::with_db(db).regenerate(course.id).await?;

    assert_eq!(
        outcome,
        ReconcileOutcome {
            created: 4,
            ..Default::default()
        }
    );
    assert_eq!(
        stored(db, course.id).await?,
        vec![
            (date(1, 1), midnight(date(1, 6)), 1),
            (date(1, 11), midnight(date(1, 16)), 2),
            (date(1, 21), midnight(date(1, 26)), 3),
            (date(1, 31), midnight(date(2, 5)), 4),
        ]
    );

    let names: Vec<_> = ReflectionRepository::new(db)
        .list(course.id)
        .await?
        .into_iter()
        .map(|r| r.display_name)
        .collect();
    assert_eq!(names[1], "Reflection 11/01");

    Ok(())
}

/// Tests that a submitted reflection blocks date realignment.
///
/// Regenerates the January course, submits to the 01-11 reflection, then changes the
/// interval to 5 days and the template.
///
/// Expected: Ok with the four dates unchanged and only templates refreshed
#[tokio::test]
async fn protected_reflection_blocks_realignment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = january_course(db).await?;
    let service = ScheduleService::with_db(db);
    service.regenerate(course.id).await?;
    let before = stored(db, course.id).await?;

    let reflections = ReflectionRepository::new(db).list(course.id).await?;
    factory::create_submission(db, reflections[1].id).await?;

    let template = json!([{"label": "What surprised you?"}]);
    let outcome = CourseService::new(db)
        .configure(
            course.id,
            ConfigureCourseParam {
                recurrence_days: Some(Some(5)),
                custom_structure: Some(Some(template.clone())),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(
        outcome,
        ReconcileOutcome {
            updated: 4,
            protected: 1,
            ..Default::default()
        }
    );
    assert_eq!(stored(db, course.id).await?, before);

    let after = ReflectionRepository::new(db).list(course.id).await?;
    assert_eq!(after[1].id, reflections[1].id);
    assert!(after
        .iter()
        .all(|r| r.content_template.as_ref() == Some(&template)));

    Ok(())
}

/// Tests that a draft submission does not protect its reflection.
///
/// Expected: Ok with the schedule realigned to the new 5-day interval
#[tokio::test]
async fn draft_submission_does_not_protect() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = january_course(db).await?;
    let service = ScheduleService::with_db(db);
    service.regenerate(course.id).await?;

    let reflections = ReflectionRepository::new(db).list(course.id).await?;
    SubmissionFactory::new(db, reflections[1].id)
        .draft()
        .build()
        .await?;

    let outcome = CourseService::new(db)
        .configure(
            course.id,
            ConfigureCourseParam {
                recurrence_days: Some(Some(5)),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(outcome.deleted, 4);
    assert_eq!(outcome.created, 7);
    assert_eq!(outcome.protected, 0);
    let dates: Vec<_> = stored(db, course.id)
        .await?
        .into_iter()
        .map(|(start, _, _)| start)
        .collect();
    assert_eq!(
        dates,
        vec![
            date(1, 1),
            date(1, 6),
            date(1, 11),
            date(1, 16),
            date(1, 21),
            date(1, 26),
            date(1, 31)
        ]
    );

    Ok(())
}

/// Tests that an unconfigured course regenerates to nothing.
///
/// Expected: Ok with zero writes
#[tokio::test]
async fn unconfigured_course_has_no_reflections() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;

    let outcome = ScheduleService::with_db(db).regenerate(course.id).await?;

    assert_eq!(outcome, ReconcileOutcome::default());
    assert!(stored(db, course.id).await?.is_empty());

    Ok(())
}

/// Tests regenerating a course that does not exist.
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

    let result = ScheduleService::with_db(db).regenerate(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
