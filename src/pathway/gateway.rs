//! Outbound pathway retrieval.
//!
//! One attempt per call, no retry. Callers decide what to show on failure.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::GatewayConfig;
use crate::error::{ConfigError, PathwayError};

use super::model::{PathwayRequest, PathwayResponse};

/// Something that can turn a pathway request into a pathway response.
#[async_trait]
pub trait PathwayGateway: Send + Sync {
    async fn fetch(&self, request: &PathwayRequest) -> Result<PathwayResponse, PathwayError>;
}

/// Create the gateway described by `config`.
///
/// A missing endpoint gives an [`UnconfiguredGateway`] so the wizard still
/// works with fallback data.
pub fn create_gateway(config: &GatewayConfig) -> Result<Arc<dyn PathwayGateway>, ConfigError> {
    match config.endpoint.as_deref() {
        Some(endpoint) => Ok(Arc::new(HttpPathwayGateway::new(endpoint, config.timeout)?)),
        None => {
            warn!("NEXTWAVE_PATHWAY_ENDPOINT not set; career wizard will use fallback roadmaps");
            Ok(Arc::new(UnconfiguredGateway))
        }
    }
}

/// POSTs the request as JSON to the configured endpoint.
pub struct HttpPathwayGateway {
    endpoint: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpPathwayGateway {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self {
            endpoint: endpoint.into(),
            timeout,
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(&self, e: reqwest::Error) -> PathwayError {
        if e.is_timeout() {
            PathwayError::Timeout {
                timeout: self.timeout,
            }
        } else {
            PathwayError::Transport {
                reason: e.to_string(),
            }
        }
    }
}

#[async_trait]
impl PathwayGateway for HttpPathwayGateway {
    async fn fetch(&self, request: &PathwayRequest) -> Result<PathwayResponse, PathwayError> {
        debug!(
            endpoint = %self.endpoint,
            career = request.career(),
            degree = %request.degree_level(),
            "Requesting pathway"
        );

        let resp = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_u16().to_string());
            warn!(status = status.as_u16(), "Pathway service returned an error status");
            return Err(PathwayError::Status {
                status: status.as_u16(),
                reason,
            });
        }

        let body = resp.text().await.map_err(|e| self.transport_error(e))?;
        serde_json::from_str(&body).map_err(|e| PathwayError::MalformedPayload {
            reason: e.to_string(),
        })
    }
}

/// Used when no endpoint is configured. Every fetch fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredGateway;

#[async_trait]
impl PathwayGateway for UnconfiguredGateway {
    async fn fetch(&self, _request: &PathwayRequest) -> Result<PathwayResponse, PathwayError> {
        Err(PathwayError::NotConfigured)
    }
}
