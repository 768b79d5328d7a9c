use thiserror::Error;

/// Failure to obtain AI feedback for a submission.
///
/// Always handled inside the feedback service, which logs it and substitutes the
/// fallback text. Never propagated to callers of the submission workflow.
#[derive(Error, Debug)]
pub enum FeedbackError {
    /// No API key is configured for the feedback provider.
    #[error("No API key configured for the feedback provider")]
    MissingApiKey,

    /// The HTTP request failed, timed out, returned an error status or a body that
    /// could not be decoded.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The provider answered without any feedback text.
    #[error("Feedback provider returned no text")]
    EmptyResponse,
}
