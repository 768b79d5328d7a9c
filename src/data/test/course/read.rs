use super::*;

/// Tests reading a course's schedule in weekday mode.
///
/// Expected: Ok(Some) with the parsed weekday selection
#[tokio::test]
async fn reads_weekday_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::CourseFactory::new(db)
        .date_range(date(1, 1), date(1, 14))
        .selected_days("Mon, Wed, Someday")
        .reflection_due_days(2)
        .build()
        .await?;

    let schedule = CourseRepository::new(db).read(course.id).await?.unwrap();

    assert_eq!(schedule.course_id, course.id);
    assert_eq!(
        schedule.recurrence,
        Recurrence::Weekdays(HashSet::from([Weekday::Mon, Weekday::Wed]))
    );
    assert_eq!(schedule.due_offset_days, 2);
    assert_eq!(schedule.dates().count(), 4);

    Ok(())
}

/// Tests reading the schedule of a missing course.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let schedule = CourseRepository::new(db).read(999).await?;

    assert!(schedule.is_none());

    Ok(())
}
