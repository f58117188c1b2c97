use std::time::Duration;

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::ServiceError;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Stateless `generateContent` client. Every call builds its own HTTP client,
/// sends exactly one request and never retries.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    model: String,
    timeout: Option<Duration>,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
        }
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    /// Transport-level timeout. None by default.
    pub fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> String {
        build_generate_url(&self.base_url, &self.model)
    }

    /// POST the request body and return the text of the first candidate.
    pub async fn generate_content(&self, body: &Value) -> Result<String, ServiceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ServiceError::Transport(format!("failed to build HTTP client: {err}")))?;

        let response = client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| ServiceError::Transport(format!("HTTP request failed: {err}")))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|err| ServiceError::Transport(format!("failed to read response: {err}")))?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&response_text)
                .ok()
                .and_then(|value| {
                    value
                        .get("error")
                        .and_then(|error| error.get("message"))
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or(response_text);
            warn!(target: "vibeguide::service", status = status.as_u16(), %message, "generateContent failed");
            return Err(ServiceError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: GenerateContentResponse = serde_json::from_str(&response_text)
            .map_err(|err| ServiceError::invalid(format!("unreadable response envelope: {err}")))?;

        envelope.first_text().ok_or_else(|| {
            let reason = envelope
                .prompt_feedback
                .and_then(|feedback| feedback.block_reason)
                .unwrap_or_else(|| "no candidate text".to_string());
            debug!(target: "vibeguide::service", %reason, "empty generateContent response");
            ServiceError::invalid(format!("response carried no text: {reason}"))
        })
    }
}

fn build_generate_url(base_url: &str, model: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.ends_with(":generateContent") {
        trimmed.to_string()
    } else {
        format!("{trimmed}/models/{model}:generateContent")
    }
}

/// Builder for a single-turn structured `generateContent` body.
#[derive(Clone, Debug)]
pub struct GenerateContentRequest {
    prompt: String,
    response_mime_type: Option<String>,
    response_schema: Option<Value>,
}

impl GenerateContentRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response_mime_type: None,
            response_schema: None,
        }
    }

    /// Constrain the output to JSON matching `schema`.
    pub fn with_json_schema(mut self, schema: Value) -> Self {
        self.response_mime_type = Some("application/json".to_string());
        self.response_schema = Some(schema);
        self
    }

    pub fn into_value(self) -> Value {
        let mut body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": self.prompt }]
            }]
        });

        let mut generation_config = serde_json::Map::new();
        if let Some(mime) = self.response_mime_type {
            generation_config.insert("responseMimeType".to_string(), json!(mime));
        }
        if let Some(schema) = self.response_schema {
            generation_config.insert("responseSchema".to_string(), schema);
        }
        if !generation_config.is_empty() {
            body["generationConfig"] = Value::Object(generation_config);
        }

        body
    }
}

/// Top-level `generateContent` response envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}
