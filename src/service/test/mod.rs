use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde_json::Value;

use crate::{error::feedback::FeedbackError, service::feedback::FeedbackProvider};


fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Provider answering every request with the same text.
struct StaticFeedback(&'static str);

#[async_trait]
impl FeedbackProvider for StaticFeedback {
    async fn generate_feedback(
        &self,
        _content: &str,
        _framework: Option<&str>,
        _structure: Option<&Value>,
    ) -> Result<String, FeedbackError> {
        Ok(self.0.to_string())
    }
}

/// Provider failing every request.
struct FailingFeedback;

#[async_trait]
impl FeedbackProvider for FailingFeedback {
    async fn generate_feedback(
        &self,
        _content: &str,
        _framework: Option<&str>,
        _structure: Option<&Value>,
    ) -> Result<String, FeedbackError> {
        Err(FeedbackError::EmptyResponse)
    }
}
