// src/core/ollama_client.rs
//! HTTP client for the local Ollama inference API

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_MODEL: &str = "qwen2.5:3b";
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

const TAGS_ENDPOINT: &str = "/api/tags";
const GENERATE_ENDPOINT: &str = "/api/generate";

const PROBE_TIMEOUT_SECS: u64 = 5;
const GENERATE_TIMEOUT_SECS: u64 = 30;

const NO_RESPONSE: &str = "No response received";

/// Outcome of one answer attempt. Failures are values, not errors, so a
/// single bad question never aborts the remaining ones; `Display` renders
/// every variant as answer text for printing and reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Answered(String),
    Unreachable,
    HttpError { status: u16, body: String },
    TransportError { cause: String },
}

impl AnswerOutcome {
    pub fn is_answered(&self) -> bool {
        matches!(self, AnswerOutcome::Answered(_))
    }
}

impl fmt::Display for AnswerOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerOutcome::Answered(text) => f.write_str(text),
            AnswerOutcome::Unreachable => f.write_str(
                "ERROR: Ollama service is not available. Please ensure Ollama is running.",
            ),
            AnswerOutcome::HttpError { status, body } => {
                write!(f, "ERROR: HTTP {} - {}", status, body)
            }
            AnswerOutcome::TransportError { cause } => {
                write!(f, "ERROR: Request failed - {}", cause)
            }
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

pub struct OllamaClient {
    client: reqwest::Client,
    model: String,
    base_url: String,
}

impl OllamaClient {
    pub fn new(model: String, base_url: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(GENERATE_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            model,
            base_url,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Probe the model listing endpoint. Anything but a clean 200 within
    /// the probe timeout counts as unavailable; there is no retry.
    pub async fn is_available(&self) -> bool {
        let url = format!("{}{}", self.base_url, TAGS_ENDPOINT);

        match self
            .client
            .get(&url)
            .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
            .send()
            .await
        {
            Ok(response) => response.status() == reqwest::StatusCode::OK,
            Err(error) => {
                debug!("Ollama probe failed: {}", error);
                false
            }
        }
    }

    /// Answer one question against the resume text.
    ///
    /// Availability is re-checked per call so the caller can keep looping
    /// even if the service disappears mid-run.
    pub async fn answer(&self, resume_text: &str, question: &str) -> AnswerOutcome {
        if !self.is_available().await {
            return AnswerOutcome::Unreachable;
        }

        let prompt = build_prompt(resume_text, question);
        let request = GenerateRequest {
            model: &self.model,
            prompt: &prompt,
            stream: false,
        };
        let url = format!("{}{}", self.base_url, GENERATE_ENDPOINT);

        let response = match self.client.post(&url).json(&request).send().await {
            Ok(response) => response,
            Err(error) => {
                warn!("Ollama request failed: {}", error);
                return AnswerOutcome::TransportError {
                    cause: error.to_string(),
                };
            }
        };

        let status = response.status();
        if status == reqwest::StatusCode::OK {
            match response.json::<GenerateResponse>().await {
                Ok(body) => AnswerOutcome::Answered(
                    body.response.unwrap_or_else(|| NO_RESPONSE.to_string()),
                ),
                Err(error) => AnswerOutcome::TransportError {
                    cause: error.to_string(),
                },
            }
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("Ollama returned error status {}: {}", status, body);
            AnswerOutcome::HttpError {
                status: status.as_u16(),
                body,
            }
        }
    }
}

fn build_prompt(resume_text: &str, question: &str) -> String {
    format!(
        "Based on the following resume information, please answer the question accurately and concisely:\n\
         \n\
         RESUME:\n\
         {}\n\
         \n\
         QUESTION: {}\n\
         \n\
         ANSWER:",
        resume_text, question
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_resume_and_question() {
        let prompt = build_prompt("Jane Doe, Engineer", "What is your job title?");
        assert!(prompt.contains("RESUME:\nJane Doe, Engineer"));
        assert!(prompt.contains("QUESTION: What is your job title?"));
        assert!(prompt.ends_with("ANSWER:"));
    }

    #[test]
    fn outcomes_render_as_answer_text() {
        assert_eq!(
            AnswerOutcome::Answered("Engineer".to_string()).to_string(),
            "Engineer"
        );
        assert_eq!(
            AnswerOutcome::Unreachable.to_string(),
            "ERROR: Ollama service is not available. Please ensure Ollama is running."
        );
        assert_eq!(
            AnswerOutcome::HttpError {
                status: 500,
                body: "boom".to_string()
            }
            .to_string(),
            "ERROR: HTTP 500 - boom"
        );
        assert_eq!(
            AnswerOutcome::TransportError {
                cause: "timed out".to_string()
            }
            .to_string(),
            "ERROR: Request failed - timed out"
        );
    }

    #[tokio::test]
    async fn refused_connection_is_unavailable() {
        // Port 1 is never listening on loopback
        let client = OllamaClient::new(
            DEFAULT_MODEL.to_string(),
            "http://127.0.0.1:1".to_string(),
        )
        .expect("client builds");

        assert!(!client.is_available().await);
    }

    #[tokio::test]
    async fn refused_connection_yields_unreachable_answer() {
        let client = OllamaClient::new(
            DEFAULT_MODEL.to_string(),
            "http://127.0.0.1:1".to_string(),
        )
        .expect("client builds");

        let outcome = client.answer("resume", "question?").await;
        assert_eq!(outcome, AnswerOutcome::Unreachable);
    }
}
