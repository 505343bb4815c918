//! Gemini client for schema-constrained plan generation.
//!
//! Sends one `generateContent` request per call with
//! `responseMimeType: application/json` and the plan response schema, then
//! deserializes the first candidate into the typed plan. The provider's
//! schema guarantee is treated as a claim to verify, not to trust.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use cineplan_core::plan::FilmPlan;

use crate::prompt::build_plan_prompt;
use crate::schema::plan_response_schema;
use crate::{GenAiError, PlanGenerator};

/// Default Generative Language API base URL.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model identifier.
const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// Configuration for the Gemini client.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key supplied out of band. `None` means every generation attempt
    /// fails with [`GenAiError::MissingCredential`].
    pub api_key: Option<String>,
    /// Model identifier (e.g. `gemini-3-pro-preview`).
    pub model: String,
    /// API base URL, overridable for tests or proxies.
    pub base_url: String,
}

impl GeminiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var           | Required | Default                                           |
    /// |-------------------|----------|---------------------------------------------------|
    /// | `GEMINI_API_KEY`  | no       | -- (generation fails until configured)            |
    /// | `GEMINI_MODEL`    | no       | `gemini-3-pro-preview`                            |
    /// | `GEMINI_BASE_URL` | no       | `https://generativelanguage.googleapis.com/v1beta`|
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        let base_url = std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        Self {
            api_key,
            model,
            base_url,
        }
    }
}

/// HTTP client for the Generative Language API.
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new client from the given configuration.
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl PlanGenerator for GeminiClient {
    async fn generate_plan(&self, synopsis: &str) -> Result<FilmPlan, GenAiError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenAiError::MissingCredential)?;

        let body = json!({
            "contents": [{
                "parts": [{ "text": build_plan_prompt(synopsis) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": plan_response_schema(),
            }
        });

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        tracing::debug!(model = %self.config.model, "Submitting plan generation request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GenAiError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GenerateContentResponse = response.json().await?;
        plan_from_response(payload)
    }
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Response body of a non-streaming `generateContent` call.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Extract the first candidate's text and deserialize it into a plan.
///
/// This is the defensive shape check: a missing candidate, empty text, or a
/// JSON document that does not match the full plan shape are all rejected,
/// never returned as a partially-typed object.
fn plan_from_response(response: GenerateContentResponse) -> Result<FilmPlan, GenAiError> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .ok_or_else(|| GenAiError::Malformed("response contains no candidate text".into()))?;

    serde_json::from_str::<FilmPlan>(&text)
        .map_err(|e| GenAiError::Malformed(format!("candidate text is not a valid plan: {e}")))
}
