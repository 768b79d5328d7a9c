//! Google Gemini feedback provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    config::Config,
    error::feedback::FeedbackError,
    service::feedback::FeedbackProvider,
};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, trimmed. `None` if there is no non-blank text.
    fn into_text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

/// Converts submitted content into readable text.
///
/// Structured answers of the form `[{"label": .., "response": ..}, ..]` become
/// `label:\nresponse` blocks separated by blank lines. Anything else is returned as-is.
fn reflection_text(content: &str) -> String {
    let Ok(Value::Array(items)) = serde_json::from_str::<Value>(content) else {
        return content.to_string();
    };
    if !items.first().is_some_and(|item| item.get("label").is_some()) {
        return content.to_string();
    }

    items
        .iter()
        .map(|item| {
            format!(
                "{}:\n{}",
                value_text(item.get("label")),
                value_text(item.get("response"))
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn value_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Question labels of a content template, if it lists any.
fn structure_labels(structure: Option<&Value>) -> Vec<String> {
    structure
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("label").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn build_prompt(content: &str, framework: Option<&str>, structure: Option<&Value>) -> String {
    let mut prompt = String::from(
        "You are an educational reflection feedback expert analyzing a student's reflection \
         journal entry. Evaluate it based on the reflection framework chosen by the educator.",
    );

    if let Some(framework) = framework {
        prompt.push_str(&format!(" The framework chosen by the educator is '{}'.", framework));
    }

    let labels = structure_labels(structure);
    if !labels.is_empty() {
        prompt.push_str("\n\nThe reflection asks the following questions:\n");
        for label in &labels {
            prompt.push_str(&format!("- {}\n", label));
        }
    }

    prompt.push_str(&format!(
        "\n\nProvide feedback separately for each question of the reflection. Be constructive, \
         encouraging and specific, helping the student improve and deepen their learning.\
         \n\nStudent's Reflection:\n{}\n\nHighlight what the student did well and suggest areas \
         for improvement and deeper exploration.",
        reflection_text(content)
    ));

    prompt
}

/// Feedback provider backed by the Gemini `generateContent` API.
///
/// Without an API key every request fails with [`FeedbackError::MissingApiKey`]
/// before any network access.
pub struct GeminiFeedbackProvider {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiFeedbackProvider {
    pub fn new(http: reqwest::Client, api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            http,
            api_key,
            model: model.into(),
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    pub fn from_config(http: reqwest::Client, config: &Config) -> Self {
        Self::new(http, config.gemini_api_key.clone(), config.gemini_model.clone())
    }

    /// Overrides the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl FeedbackProvider for GeminiFeedbackProvider {
    async fn generate_feedback(
        &self,
        content: &str,
        framework: Option<&str>,
        structure: Option<&Value>,
    ) -> Result<String, FeedbackError> {
        let api_key = self.api_key.as_deref().ok_or(FeedbackError::MissingApiKey)?;

        let prompt = build_prompt(content, framework, structure);
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
        };

        let response: GenerateContentResponse = self
            .http
            .post(format!("{}/models/{}:generateContent", self.base_url, self.model))
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response.into_text().ok_or(FeedbackError::EmptyResponse)
    }
}
