use super::*;
use crate::service::schedule::plan::ReconcileOutcome;

/// Tests selecting dates on a course without reflections.
///
/// Expected: Ok with one reflection per distinct date, numbered by start date
#[tokio::test]
async fn creates_selected_reflections() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = january_course(db).await?;

    let outcome = ScheduleService::with_db(db)
        .select_dates(course.id, &[date(1, 20), date(1, 3), date(1, 20)])
        .await?;

    assert_eq!(outcome.created, 2);
    assert_eq!(
        stored(db, course.id).await?,
        vec![
            (date(1, 3), midnight(date(1, 8)), 1),
            (date(1, 20), midnight(date(1, 25)), 2),
        ]
    );

    Ok(())
}

/// Tests that repeating a selection writes nothing.
///
/// Expected: Ok with zero writes on the second call
#[tokio::test]
async fn repeated_selection_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = january_course(db).await?;
    let service = ScheduleService::with_db(db);
    let targets = [date(1, 2), date(1, 9), date(1, 16)];

    service.select_dates(course.id, &targets).await?;
    let reflections = ReflectionRepository::new(db).list(course.id).await?;
    factory::create_submission(db, reflections[0].id).await?;
    let before = stored(db, course.id).await?;

    let outcome = service.select_dates(course.id, &targets).await?;

    assert_eq!(
        outcome,
        ReconcileOutcome {
            protected: 1,
            ..Default::default()
        }
    );
    assert_eq!(stored(db, course.id).await?, before);

    Ok(())
}

/// Tests that a protected reflection outside the selection is kept.
///
/// Selects 01-03 and 01-19 after the 01-12 reflection received a submission.
///
/// Expected: Ok with 01-05 deleted, 01-03 created and 01-12 kept with its dates
#[tokio::test]
async fn keeps_protected_reflection_outside_selection() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = january_course(db).await?;
    let service = ScheduleService::with_db(db);

    service
        .select_dates(course.id, &[date(1, 5), date(1, 12), date(1, 19)])
        .await?;
    let reflections = ReflectionRepository::new(db).list(course.id).await?;
    factory::create_submission(db, reflections[1].id).await?;

    let outcome = service
        .select_dates(course.id, &[date(1, 3), date(1, 19)])
        .await?;

    assert_eq!(outcome.deleted, 1);
    assert_eq!(outcome.created, 1);
    assert_eq!(outcome.protected, 1);
    assert_eq!(
        stored(db, course.id).await?,
        vec![
            (date(1, 3), midnight(date(1, 8)), 1),
            (date(1, 12), midnight(date(1, 17)), 2),
            (date(1, 19), midnight(date(1, 24)), 3),
        ]
    );

    Ok(())
}

/// Tests that a new due offset moves unprotected reflections only.
///
/// Expected: Ok with the unprotected due date recomputed and the protected one kept
#[tokio::test]
async fn recomputes_due_dates_of_unprotected_reflections() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = january_course(db).await?;
    let service = ScheduleService::with_db(db);
    let targets = [date(1, 1), date(1, 15)];

    service.select_dates(course.id, &targets).await?;
    let reflections = ReflectionRepository::new(db).list(course.id).await?;
    factory::create_submission(db, reflections[0].id).await?;

    crate::data::course::CourseRepository::new(db)
        .configure(
            course.id,
            ConfigureCourseParam {
                reflection_due_days: Some(Some(2)),
                ..Default::default()
            },
        )
        .await?;
    let outcome = service.select_dates(course.id, &targets).await?;

    assert_eq!(outcome.updated, 1);
    assert_eq!(
        stored(db, course.id).await?,
        vec![
            (date(1, 1), midnight(date(1, 6)), 1),
            (date(1, 15), midnight(date(1, 17)), 2),
        ]
    );

    Ok(())
}
