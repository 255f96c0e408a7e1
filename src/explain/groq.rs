//! Groq chat-completions backend.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::offline::describe_reasons;
use super::{ExplainError, Explainer};
use crate::demographics::Demographics;
use crate::types::{Mpin, WeaknessReason};

/// Environment variable holding the Groq API key.
pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";
const TEMPERATURE: f32 = 0.4;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

/// Explainer backed by a large language model served by Groq.
///
/// Only weak verdicts reach the network; strong ones are described locally.
/// The prompt carries the reason tags and the MPIN length, never the digits.
///
/// Built on `reqwest::blocking`, which panics when its client is created,
/// used or dropped on an async runtime thread. From async code, call it
/// through [`describe_tx`](crate::describe_tx) or `tokio::task::spawn_blocking`.
pub struct GroqExplainer {
    api_key: SecretString,
    base_url: String,
    model: String,
    client: reqwest::blocking::Client,
}

impl GroqExplainer {
    /// # Errors
    ///
    /// Returns [`ExplainError::Http`] if the HTTP client cannot be built.
    pub fn new(api_key: SecretString) -> Result<Self, ExplainError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ExplainError::Http(e.to_string()))?;
        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            client,
        })
    }

    /// Reads the API key from `GROQ_API_KEY`.
    ///
    /// Only the process environment is read. Callers that keep the key in a
    /// `.env` file must load it into the environment before calling this.
    ///
    /// # Errors
    ///
    /// Returns [`ExplainError::MissingApiKey`] if the variable is unset or blank.
    pub fn from_env() -> Result<Self, ExplainError> {
        let key = std::env::var(GROQ_API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ExplainError::MissingApiKey)?;
        Self::new(SecretString::new(key.into()))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl Explainer for GroqExplainer {
    fn describe(&self, pin: &Mpin, reasons: &[WeaknessReason], _dates: &Demographics) -> Result<String, ExplainError> {
        if reasons.is_empty() {
            return Ok(describe_reasons(reasons));
        }

        let prompt = build_prompt(pin.len(), reasons);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage { role: "user", content: &prompt }],
            temperature: TEMPERATURE,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!("Requesting MPIN explanation from {}", self.model);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| ExplainError::Http(e.to_string()))?;

        let body = response.text().map_err(|e| ExplainError::Http(e.to_string()))?;
        parse_completion(&body)
    }
}

fn build_prompt(pin_length: usize, reasons: &[WeaknessReason]) -> String {
    let codes: Vec<String> = reasons.iter().map(WeaknessReason::code).collect();
    format!(
        "The user has a {pin_length}-digit MPIN which has been marked WEAK due to: {}.\n\
         Give a short, clear explanation of why it's weak and suggest 1-2 secure MPIN ideas.\n\
         Keep it under 3 sentences. Tone: professional and friendly.",
        codes.join(", ")
    )
}

fn parse_completion(body: &str) -> Result<String, ExplainError> {
    let response: ChatResponse = serde_json::from_str(body).map_err(|e| ExplainError::Http(e.to_string()))?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or(ExplainError::EmptyResponse)
}
