use super::*;
use serde_json::json;

/// Tests configuring a course's schedule.
///
/// Verifies that provided fields are written and the weekday selection is stored
/// comma-joined.
///
/// Expected: Ok(Some) with the new configuration
#[tokio::test]
async fn writes_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let template = json!([{"label": "What did you learn?"}]);

    let configured = CourseRepository::new(db)
        .configure(
            course.id,
            ConfigureCourseParam {
                framework: Some(Some("Bloom's Taxonomy".to_string())),
                start_date: Some(Some(date(1, 1))),
                end_date: Some(Some(date(3, 31))),
                reflection_due_days: Some(Some(3)),
                selected_days: Some(Some(vec!["Mon".to_string(), "Thursday".to_string()])),
                custom_structure: Some(Some(template.clone())),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(configured.framework.as_deref(), Some("Bloom's Taxonomy"));
    assert_eq!(configured.start_date, Some(date(1, 1)));
    assert_eq!(configured.end_date, Some(date(3, 31)));
    assert_eq!(configured.reflection_due_days, Some(3));
    assert_eq!(configured.selected_days.as_deref(), Some("Mon,Thursday"));
    assert_eq!(configured.custom_structure, Some(template));
    assert_eq!(configured.name, course.name);

    Ok(())
}

/// Tests that absent fields are left untouched and `Some(None)` clears a field.
///
/// Expected: Ok(Some) with the recurrence kept and the weekday selection cleared
#[tokio::test]
async fn keeps_absent_fields_and_clears_explicit_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::CourseFactory::new(db)
        .recurrence_days(10)
        .selected_days("Mon")
        .build()
        .await?;

    let configured = CourseRepository::new(db)
        .configure(
            course.id,
            ConfigureCourseParam {
                selected_days: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(configured.recurrence_days, Some(10));
    assert!(configured.selected_days.is_none());

    Ok(())
}

/// Tests configuring a course that does not exist.
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

    let result = CourseRepository::new(db)
        .configure(999, ConfigureCourseParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
