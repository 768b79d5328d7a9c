use super::*;
use crate::data::submission::SubmissionRepository;

/// Tests submitting before the due date.
///
/// Expected: Ok with content, submission time and provider feedback stored
#[tokio::test]
async fn stores_submission_with_feedback() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reflection = open_reflection(db).await?;
    let provider = StaticFeedback("Clear and specific.");
    let now = midnight(date(1, 5));

    let submission = SubmissionService::new(db, &provider)
        .submit(
            SubmitReflectionParam {
                reflection_id: reflection.id,
                student_id: 42,
                content: "I learned about borrowing".to_string(),
            },
            now,
        )
        .await?;

    assert_eq!(submission.content.as_deref(), Some("I learned about borrowing"));
    assert_eq!(submission.ai_feedback.as_deref(), Some("Clear and specific."));
    assert_eq!(submission.submitted_at, Some(now));
    assert!(SubmissionRepository::new(db).has_submission(reflection.id).await?);

    Ok(())
}

/// Tests that a failing feedback provider does not block the submission.
///
/// Expected: Ok with the fallback feedback stored
#[tokio::test]
async fn stores_fallback_when_feedback_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reflection = open_reflection(db).await?;

    let submission = SubmissionService::new(db, &FailingFeedback)
        .submit(
            SubmitReflectionParam {
                reflection_id: reflection.id,
                student_id: 42,
                content: "Answer".to_string(),
            },
            midnight(date(1, 5)),
        )
        .await?;

    assert_eq!(submission.ai_feedback.as_deref(), Some(FALLBACK_FEEDBACK));

    Ok(())
}

/// Tests submitting after the due date.
///
/// Expected: Err(AppError::SubmissionClosed) and nothing stored
#[tokio::test]
async fn rejects_submission_after_due_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reflection = open_reflection(db).await?;
    let provider = StaticFeedback("unused");

    let result = SubmissionService::new(db, &provider)
        .submit(
            SubmitReflectionParam {
                reflection_id: reflection.id,
                student_id: 42,
                content: "Late answer".to_string(),
            },
            midnight(date(1, 9)),
        )
        .await;

    match result {
        Err(AppError::SubmissionClosed {
            reflection_id,
            due_date,
        }) => {
            assert_eq!(reflection_id, reflection.id);
            assert_eq!(due_date, midnight(date(1, 8)));
        }
        other => panic!("expected SubmissionClosed, got {:?}", other),
    }
    assert!(!SubmissionRepository::new(db).has_submission(reflection.id).await?);

    Ok(())
}

/// Tests submitting to a reflection that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_reflection() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SubmissionService::new(db, &FailingFeedback)
        .submit(
            SubmitReflectionParam {
                reflection_id: 999,
                student_id: 42,
                content: "Answer".to_string(),
            },
            midnight(date(1, 5)),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests submitting blank content.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_blank_content() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reflection = open_reflection(db).await?;

    let result = SubmissionService::new(db, &FailingFeedback)
        .submit(
            SubmitReflectionParam {
                reflection_id: reflection.id,
                student_id: 42,
                content: "   ".to_string(),
            },
            midnight(date(1, 5)),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests resubmitting before the due date.
///
/// Expected: Ok with the same row updated to the new content
#[tokio::test]
async fn resubmission_overwrites_previous_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reflection = open_reflection(db).await?;
    let provider = StaticFeedback("Noted.");
    let service = SubmissionService::new(db, &provider);

    let first = service
        .submit(
            SubmitReflectionParam {
                reflection_id: reflection.id,
                student_id: 42,
                content: "Draft thoughts".to_string(),
            },
            midnight(date(1, 3)),
        )
        .await?;
    let second = service
        .submit(
            SubmitReflectionParam {
                reflection_id: reflection.id,
                student_id: 42,
                content: "Final thoughts".to_string(),
            },
            midnight(date(1, 4)),
        )
        .await?;

    assert_eq!(second.id, first.id);
    assert_eq!(second.content.as_deref(), Some("Final thoughts"));
    assert_eq!(service.list_for_reflection(reflection.id).await?.len(), 1);

    Ok(())
}
