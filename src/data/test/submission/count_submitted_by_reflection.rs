use super::*;

/// Tests counting submitted entries of a reflection.
///
/// Expected: Ok(2), drafts are not counted
#[tokio::test]
async fn counts_submitted_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reflection_id = reflection_id(db).await?;
    factory::create_submission(db, reflection_id).await?;
    factory::create_submission(db, reflection_id).await?;
    SubmissionFactory::new(db, reflection_id).draft().build().await?;

    let count = SubmissionRepository::new(db)
        .count_submitted_by_reflection(reflection_id)
        .await?;

    assert_eq!(count, 2);

    Ok(())
}

/// Tests that submissions are listed by student.
///
/// Expected: Ok with all three rows including the draft
#[tokio::test]
async fn lists_all_rows_of_reflection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reflection_id = reflection_id(db).await?;
    SubmissionFactory::new(db, reflection_id).student_id(3).build().await?;
    SubmissionFactory::new(db, reflection_id).student_id(1).build().await?;
    SubmissionFactory::new(db, reflection_id)
        .student_id(2)
        .draft()
        .build()
        .await?;

    let students: Vec<_> = SubmissionRepository::new(db)
        .get_by_reflection(reflection_id)
        .await?
        .iter()
        .map(|s| s.student_id)
        .collect();

    assert_eq!(students, vec![1, 2, 3]);

    Ok(())
}
