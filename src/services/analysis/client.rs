use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use super::types::{AnalysisRequest, AnalysisResult};

pub const GENERIC_FAILURE_MESSAGE: &str = "分析失败，请稍后重试";
pub const NETWORK_FAILURE_MESSAGE: &str = "请检查网络连接后重试";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Connectivity or transport timeout.
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx status. Displays the service-provided detail when there is one.
    #[error("{}", .detail.as_deref().unwrap_or(GENERIC_FAILURE_MESSAGE))]
    Service { status: u16, detail: Option<String> },

    /// Success status but the body does not match the contract.
    #[error("malformed analysis response: {0}")]
    Parse(String),
}

impl AnalysisError {
    /// Best message to put in front of the user.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Service { .. } => self.to_string(),
            AnalysisError::Network(_) => NETWORK_FAILURE_MESSAGE.to_string(),
            AnalysisError::Parse(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// The one call the intake orchestrator needs from the outside world.
#[async_trait]
pub trait AnalysisPort: Send + Sync {
    async fn submit(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError>;
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Transport-level timeout. The orchestrator adds none of its own.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Reads `MEDIA_FILTER_API_URL` and `MEDIA_FILTER_TIMEOUT_SECS`, keeping defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("MEDIA_FILTER_API_URL") {
            if !url.trim().is_empty() {
                config.base_url = url.trim().to_string();
            }
        }
        if let Ok(secs) = std::env::var("MEDIA_FILTER_TIMEOUT_SECS") {
            match secs.trim().parse::<u64>() {
                Ok(secs) => config.timeout = Duration::from_secs(secs),
                Err(_) => warn!("Ignoring invalid MEDIA_FILTER_TIMEOUT_SECS: {:?}", secs),
            }
        }
        config
    }
}

#[derive(Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    detail: serde_json::Value,
}

#[derive(Deserialize)]
struct HealthResponse {
    status: String,
}

#[derive(Clone)]
pub struct AnalysisClient {
    client: Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(config.timeout)
                .build()
                .unwrap_or_default(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Single attempt, never retried.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        debug!("POST /analyze ({}, {} chars)", request.kind(), request.content().chars().count());

        let response = self
            .client
            .post(self.endpoint("analyze"))
            .json(request)
            .send()
            .await
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable error body still counts as a service failure.
            let detail = response.bytes().await.ok().and_then(|body| service_detail(&body));
            warn!("Analysis service returned {}: {:?}", status, detail);
            return Err(AnalysisError::Service {
                status: status.as_u16(),
                detail,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AnalysisError::Network(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| AnalysisError::Parse(e.to_string()))
    }

    /// `GET /health`, true only for `{"status": "healthy"}`.
    pub async fn health(&self) -> Result<bool, AnalysisError> {
        let response = self
            .client
            .get(self.endpoint("health"))
            .send()
            .await
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Ok(false);
        }

        let health: HealthResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::Parse(e.to_string()))?;
        Ok(health.status == "healthy")
    }
}

#[async_trait]
impl AnalysisPort for AnalysisClient {
    async fn submit(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        self.analyze(request).await
    }
}

/// Only a non-empty string `detail` counts; validation errors carry a list.
fn service_detail(body: &[u8]) -> Option<String> {
    let payload: ErrorPayload = serde_json::from_slice(body).ok()?;
    match payload.detail {
        serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail),
        _ => None,
    }
}
