use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-exp";
const DEFAULT_FEEDBACK_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub database_url: String,

    /// Missing keys are tolerated; feedback then always falls back.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,

    pub feedback_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let feedback_timeout_secs = match std::env::var("FEEDBACK_TIMEOUT_SECS") {
            Ok(value) => value
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "FEEDBACK_TIMEOUT_SECS".to_string(),
                    value,
                })?,
            Err(_) => DEFAULT_FEEDBACK_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            feedback_timeout: Duration::from_secs(feedback_timeout_secs),
        })
    }
}
