//! Pathway generation backends.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::catalog::DegreeLevel;
use crate::config::ServiceConfig;
use crate::error::{ConfigError, GenerationError};
use crate::pathway::PathwayResult;

const PROVIDER: &str = "gemini";

static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*(.*?)```").expect("fenced block pattern is valid")
});

/// Produces a pathway for a career and starting degree.
#[async_trait]
pub trait PathwayGenerator: Send + Sync {
    async fn generate(
        &self,
        career: &str,
        degree_level: DegreeLevel,
    ) -> Result<PathwayResult, GenerationError>;
}

/// Gemini `generateContent` over REST.
pub struct GeminiGenerator {
    client: reqwest::Client,
    api_key: SecretString,
    model: String,
    base_url: String,
}

impl GeminiGenerator {
    pub fn new(
        api_key: SecretString,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self {
            client,
            api_key,
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build a generator from config, or `None` when no API key is set.
    pub fn from_config(config: &ServiceConfig) -> Result<Option<Self>, ConfigError> {
        let Some(key) = config.gemini_api_key.clone() else {
            return Ok(None);
        };
        Self::new(
            key,
            config.gemini_model.clone(),
            config.gemini_base_url.clone(),
            config.generation_timeout,
        )
        .map(Some)
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
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

impl GenerateContentResponse {
    fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|p| p.text.as_deref())
    }
}

#[async_trait]
impl PathwayGenerator for GeminiGenerator {
    async fn generate(
        &self,
        career: &str,
        degree_level: DegreeLevel,
    ) -> Result<PathwayResult, GenerationError> {
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": build_prompt(career, degree_level) }] }]
        });

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.expose_secret())])
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::RequestFailed {
                provider: PROVIDER.to_string(),
                reason: e.without_url().to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::RequestFailed {
                provider: PROVIDER.to_string(),
                reason: format!("HTTP {status}"),
            });
        }

        let reply: GenerateContentResponse =
            response
                .json()
                .await
                .map_err(|e| GenerationError::InvalidResponse {
                    provider: PROVIDER.to_string(),
                    reason: e.without_url().to_string(),
                })?;

        let text = reply.text().ok_or_else(|| GenerationError::InvalidResponse {
            provider: PROVIDER.to_string(),
            reason: "no text candidate".to_string(),
        })?;
        debug!(career, chars = text.len(), "Gemini reply received");

        parse_pathway(text)
    }
}

/// Parse a model reply into a pathway, tolerating markdown fences and
/// surrounding prose.
pub fn parse_pathway(text: &str) -> Result<PathwayResult, GenerationError> {
    let json = extract_json_object(text);
    serde_json::from_str(json).map_err(|e| {
        warn!(error = %e, "Failed to parse generated pathway");
        GenerationError::Json(e)
    })
}

/// Extract a JSON object from model output that might contain markdown or
/// extra text.
fn extract_json_object(text: &str) -> &str {
    let trimmed = text.trim();

    if trimmed.starts_with('{') {
        return trimmed;
    }

    if let Some(inner) = FENCED_BLOCK.captures(trimmed).and_then(|c| c.get(1)) {
        return inner.as_str().trim();
    }

    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    }
}

fn build_prompt(career: &str, degree_level: DegreeLevel) -> String {
    format!(
        r#"Generate a comprehensive educational pathway for becoming a {career} starting with a {degree_level} degree.

The pathway should include:
1. Associate's degree (A.A./A.S.) - specific programs if applicable
2. Bachelor's degree (B.S.) - transfer plan and target universities
3. Master's degree (M.S.) - if relevant
4. Required certifications and exams
5. Internships or practical experience opportunities
6. Articulation agreements with other institutions

Respond with JSON only, using this structure:
{{
  "career": "{career}",
  "degreeLevel": "{degree_level}",
  "associates": {{"programs": ["..."], "duration": "2 years", "keyCourses": ["..."]}},
  "bachelors": {{"universities": ["..."], "articulationAgreements": ["..."], "duration": "2 years (after AA)", "keyCourses": ["..."]}},
  "masters": {{"universities": ["..."], "duration": "2 years", "required": false}},
  "certifications": [{{"name": "...", "required": true, "timing": "After BS"}}],
  "exams": [{{"name": "...", "required": true, "timing": "After BS"}}],
  "internships": ["..."],
  "alternativePathways": ["..."]
}}

Be specific and realistic."#
    )
}
