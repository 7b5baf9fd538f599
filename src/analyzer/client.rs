//! HTTP client for the analyzer endpoint.

use std::time::Duration;

use reqwest::header::{HeaderValue, ACCEPT};
use thiserror::Error;
use url::Url;

use crate::analyzer::types::Analysis;
use crate::config::AnalyzerConfig;
use crate::observability::metrics;

/// Errors that can occur while talking to the analyzer.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The configured endpoint is not a usable URL.
    #[error("Invalid analyzer endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// Building the HTTP client failed.
    #[error("Failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    /// Connection, timeout or body read failure.
    #[error("Analyzer request failed: {0}")]
    Transport(reqwest::Error),

    /// The analyzer answered with a non-success status.
    #[error("Analyzer returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The analyzer answered with something that is not an analysis.
    #[error("Malformed analyzer response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl AnalyzerError {
    /// Whether asking again later could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            AnalyzerError::Transport(_) => true,
            AnalyzerError::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            AnalyzerError::InvalidEndpoint(_) => "endpoint",
            AnalyzerError::Client(_) => "client",
            AnalyzerError::Transport(_) => "transport",
            AnalyzerError::Status { .. } => "status",
            AnalyzerError::Decode(_) => "decode",
        }
    }
}

/// Client for `GET {base_url}{analyze_path}?url=...`.
#[derive(Debug, Clone)]
pub struct AnalyzerClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl AnalyzerClient {
    /// Create a client from configuration.
    pub fn new(config: &AnalyzerConfig) -> Result<Self, AnalyzerError> {
        let endpoint = Url::parse(&config.base_url)?.join(&config.analyze_path)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(AnalyzerError::Client)?;

        Ok(Self { client, endpoint })
    }

    /// The full request URL for analyzing `url`.
    pub fn request_url(&self, url: &str) -> Url {
        let mut request_url = self.endpoint.clone();
        request_url.query_pairs_mut().clear().append_pair("url", url);
        request_url
    }

    /// Ask the analyzer about `url`. Failures are returned as-is; no retry.
    pub async fn analyze(&self, url: &str) -> Result<Analysis, AnalyzerError> {
        let result = self.fetch(url).await;

        match &result {
            Ok(analysis) => {
                metrics::record_analysis("ok");
                tracing::debug!(
                    url = %url,
                    raw = %analysis.raw_url(),
                    detections = analysis.relationships.detections.data.len(),
                    "Analysis received"
                );
            }
            Err(e) => {
                metrics::record_analysis(e.kind());
                tracing::warn!(url = %url, error = %e, "Analysis failed");
            }
        }

        result
    }

    async fn fetch(&self, url: &str) -> Result<Analysis, AnalyzerError> {
        let response = self
            .client
            .get(self.request_url(url))
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(AnalyzerError::Transport)?;

        let status = response.status();
        let text = response.text().await.map_err(AnalyzerError::Transport)?;

        if !status.is_success() {
            return Err(AnalyzerError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}
