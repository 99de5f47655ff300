//! Error types for Next Wave.

use std::time::Duration;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pathway error: {0}")]
    Pathway(#[from] PathwayError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    #[error("Service error: {0}")]
    Service(#[from] ServiceError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Failures while retrieving a pathway from the generation service.
///
/// The `Display` text is what the career wizard shows next to the fallback
/// roadmap, so it reads as a user-facing sentence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathwayError {
    #[error("Career field is required")]
    EmptyCareer,

    #[error("Pathway service is not configured")]
    NotConfigured,

    #[error("Failed to reach pathway service: {reason}")]
    Transport { reason: String },

    #[error("Pathway request timed out after {}s", timeout.as_secs())]
    Timeout { timeout: Duration },

    #[error("API error: {reason}")]
    Status { status: u16, reason: String },

    #[error("Invalid pathway response: {reason}")]
    MalformedPayload { reason: String },
}

/// Static catalog construction and lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate major id: {id}")]
    DuplicateMajor { id: String },

    #[error("Duplicate program id {id} in major {major}")]
    DuplicateProgram { major: String, id: String },

    #[error("Career profile {title} must have a positive starting salary")]
    NonPositiveSalary { title: String },

    #[error("Catalog must contain at least one {kind}")]
    Empty { kind: &'static str },
}

/// Errors returned to the presentation shell from `set_field`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("Unknown field {name} for {flow}")]
    UnknownField { flow: &'static str, name: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("{flow} has been closed")]
    Closed { flow: &'static str },

    #[error("{flow} is waiting for a pathway")]
    Busy { flow: &'static str },

    #[error("{flow} cannot be edited on the {step} step")]
    ReadOnlyStep { flow: &'static str, step: String },
}

/// Errors raised by the pathway-generation endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Career field is required")]
    MissingCareer,

    #[error("Unsupported degree level: {0}")]
    UnsupportedDegree(String),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

/// Failures inside a `PathwayGenerator` backend.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Provider {provider} request failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
