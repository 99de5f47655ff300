//! Configuration types.

use std::time::Duration;

use secrecy::SecretString;

/// Default timeout for a single pathway request.
const DEFAULT_PATHWAY_TIMEOUT_SECS: u64 = 30;

/// Client-side configuration for the pathway gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Pathway endpoint URL. `None` means the wizard always falls back.
    pub endpoint: Option<String>,
    /// Request timeout for a single attempt.
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout: Duration::from_secs(DEFAULT_PATHWAY_TIMEOUT_SECS),
        }
    }
}

impl GatewayConfig {
    /// Build config from environment variables.
    ///
    /// `NEXTWAVE_PATHWAY_ENDPOINT` may be unset; blank values count as unset.
    pub fn from_env() -> Self {
        let endpoint = std::env::var("NEXTWAVE_PATHWAY_ENDPOINT")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let timeout_secs: u64 = std::env::var("NEXTWAVE_PATHWAY_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_PATHWAY_TIMEOUT_SECS);

        Self {
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Server-side configuration for the pathway-generation endpoint.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Port the HTTP server binds on.
    pub port: u16,
    /// Gemini API key. Without it every request gets the fallback pathway.
    pub gemini_api_key: Option<SecretString>,
    /// Gemini model name.
    pub gemini_model: String,
    /// Base URL of the Gemini REST API.
    pub gemini_base_url: String,
    /// Timeout for one generation call.
    pub generation_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            gemini_api_key: None,
            gemini_model: "gemini-pro".to_string(),
            gemini_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            generation_timeout: Duration::from_secs(60),
        }
    }
}

impl ServiceConfig {
    /// Build config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port: u16 = std::env::var("NEXTWAVE_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(SecretString::from);

        let gemini_model =
            std::env::var("NEXTWAVE_GEMINI_MODEL").unwrap_or(defaults.gemini_model);

        let gemini_base_url =
            std::env::var("NEXTWAVE_GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url);

        let generation_timeout = std::env::var("NEXTWAVE_GENERATION_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.generation_timeout);

        Self {
            port,
            gemini_api_key,
            gemini_model,
            gemini_base_url,
            generation_timeout,
        }
    }
}
