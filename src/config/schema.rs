//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the UI server.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the UI server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct UiConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Where the URL analyzer lives.
    pub analyzer: AnalyzerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// In-memory session limits.
    pub sessions: SessionConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Analyzer endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Base URL of the Checkmate service (e.g., "http://localhost:9099").
    pub base_url: String,

    /// Path of the analyze endpoint, joined onto `base_url`.
    pub analyze_path: String,

    /// Total time allowed for one analysis request in seconds.
    pub timeout_secs: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9099".to_string(),
            analyze_path: "/ui/api/analyze".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Timeout configuration for incoming requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Session store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Maximum number of live sessions held in memory.
    pub max_sessions: usize,

    /// Sessions untouched for this many seconds are dropped.
    pub idle_ttl_secs: u64,

    /// How often the background sweep looks for idle sessions, in seconds.
    pub sweep_interval_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_sessions: 10_000,
            idle_ttl_secs: 1800,
            sweep_interval_secs: 60,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: UiConfig = toml::from_str(
            r#"
            [analyzer]
            base_url = "http://checkmate:9099"

            [sessions]
            max_sessions = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.analyzer.base_url, "http://checkmate:9099");
        assert_eq!(config.analyzer.analyze_path, "/ui/api/analyze");
        assert_eq!(config.sessions.max_sessions, 5);
        assert_eq!(config.sessions.idle_ttl_secs, 1800);
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_empty_config() {
        let config: UiConfig = toml::from_str("").unwrap();
        assert_eq!(config.timeouts.request_secs, 30);
    }
}
