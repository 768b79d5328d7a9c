use super::*;

/// Tests writing a planned reflection update.
///
/// Verifies that the changed sequence number and due date are written while the
/// start date and display name stay as they were.
///
/// Expected: Ok with only the planned fields changed
#[tokio::test]
async fn writes_changed_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = CourseFactory::new(db)
        .date_range(date(1, 1), date(1, 31))
        .reflection_due_days(3)
        .build()
        .await?;
    let reflection = ReflectionFactory::new(db, course.id, date(1, 8))
        .sequence_number(2)
        .build()
        .await?;

    let schedule = schedule(db, course.id).await?;
    let plan = plan_selection(&schedule, &[date(1, 8)], existing(db, course.id).await?);
    assert_eq!(plan.updates().len(), 1);

    ReflectionRepository::new(db)
        .update(&plan.updates()[0])
        .await?;

    let stored = entity::prelude::Reflection::find_by_id(reflection.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.sequence_number, 1);
    assert_eq!(stored.due_date, midnight(date(1, 11)));
    assert_eq!(stored.start_date, reflection.start_date);
    assert_eq!(stored.display_name, reflection.display_name);

    Ok(())
}

/// Tests that a due date change is refused once the reflection has a submission.
///
/// The update is planned while the reflection is unprotected and written after a
/// student submitted.
///
/// Expected: Err(DbErr::RecordNotUpdated) and the stored due date unchanged
#[tokio::test]
async fn refuses_due_date_change_after_submission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = CourseFactory::new(db)
        .date_range(date(1, 1), date(1, 31))
        .reflection_due_days(3)
        .build()
        .await?;
    let reflection = factory::create_reflection(db, course.id, date(1, 8)).await?;

    let schedule = schedule(db, course.id).await?;
    let plan = plan_selection(&schedule, &[date(1, 8)], existing(db, course.id).await?);
    assert_eq!(plan.updates().len(), 1);
    assert!(plan.updates()[0].due_date().is_some());

    factory::create_submission(db, reflection.id).await?;

    let result = ReflectionRepository::new(db)
        .update(&plan.updates()[0])
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));
    let stored = entity::prelude::Reflection::find_by_id(reflection.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.due_date, reflection.due_date);

    Ok(())
}
