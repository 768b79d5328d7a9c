//! AI feedback on submitted reflections.
//!
//! A [`FeedbackProvider`] may fail for any reason. [`FeedbackService`] turns every
//! failure into [`FALLBACK_FEEDBACK`] so the submission workflow never fails because
//! of feedback.

pub mod gemini;

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::error::feedback::FeedbackError;

/// Feedback stored when the provider cannot produce any.
pub const FALLBACK_FEEDBACK: &str =
    "Thank you for your thoughtful reflection. Keep up the great work!";

/// Source of AI-generated feedback.
#[async_trait]
pub trait FeedbackProvider: Send + Sync {
    /// Generates feedback for a submission.
    ///
    /// # Arguments
    /// - `content` - Submitted answers, JSON-encoded or plain text
    /// - `framework` - Reflection framework chosen for the course
    /// - `structure` - Content template of the reflection
    async fn generate_feedback(
        &self,
        content: &str,
        framework: Option<&str>,
        structure: Option<&Value>,
    ) -> Result<String, FeedbackError>;
}

pub struct FeedbackService<'a, P: ?Sized> {
    provider: &'a P,
}

impl<'a, P: FeedbackProvider + ?Sized> FeedbackService<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Generates feedback, substituting [`FALLBACK_FEEDBACK`] on any failure.
    pub async fn generate(
        &self,
        content: &str,
        framework: Option<&str>,
        structure: Option<&Value>,
    ) -> String {
        match self
            .provider
            .generate_feedback(content, framework, structure)
            .await
        {
            Ok(feedback) => feedback,
            Err(e) => {
                warn!("Falling back to default feedback: {}", e);
                FALLBACK_FEEDBACK.to_string()
            }
        }
    }
}
