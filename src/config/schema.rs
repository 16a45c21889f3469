//! Configuration schema definitions.
//!
//! This module defines the complete static configuration for the gateway
//! core. All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::net::plan::ServerProtocol;
use crate::routing::push;

/// Default port for the main listener.
pub const DEFAULT_MAIN_PORT: u16 = 7001;

/// Root configuration for the gateway core.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener definitions, one binding per entry.
    pub listeners: Vec<ListenerConfig>,

    /// Path prefixes that select the push/streaming pipeline.
    pub push_prefixes: Vec<String>,

    /// Cluster master discovery settings.
    pub discovery: DiscoveryConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// A single listener definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenerConfig {
    /// Listener identifier for logging.
    pub name: String,

    /// Port to bind on the wildcard address.
    pub port: u16,

    /// Protocol flavor installed on this listener.
    #[serde(default)]
    pub protocol: ServerProtocol,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            name: "main".to_string(),
            port: DEFAULT_MAIN_PORT,
            protocol: ServerProtocol::Http,
        }
    }
}

/// Cluster master discovery configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// HTTP endpoint publishing the current master descriptor as JSON.
    pub endpoint: String,

    /// Poll interval in milliseconds.
    pub poll_interval_ms: u64,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8100/api/v1/leader".to_string(),
            poll_interval_ms: 5000,
            request_timeout_secs: 5,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listeners: vec![ListenerConfig::default()],
            push_prefixes: push::default_prefixes(),
            discovery: DiscoveryConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listener_is_main_7001() {
        let listener = ListenerConfig::default();
        assert_eq!(listener.name, "main");
        assert_eq!(listener.port, DEFAULT_MAIN_PORT);
        assert_eq!(listener.protocol, ServerProtocol::Http);
    }

    #[test]
    fn default_config_carries_canonical_prefixes() {
        let config = GatewayConfig::default();
        assert_eq!(config.listeners.len(), 1);
        assert!(config.push_prefixes.contains(&"/jobstatus".to_string()));
        assert!(config.push_prefixes.contains(&"/api/v1/jobstatus".to_string()));
    }

    #[test]
    fn minimal_toml_fills_defaults() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [[listeners]]
            name = "main"
            port = 7101
            "#,
        )
        .unwrap();
        assert_eq!(config.listeners.len(), 1);
        assert_eq!(config.listeners[0].port, 7101);
        assert_eq!(config.listeners[0].protocol, ServerProtocol::Http);
        assert_eq!(config.discovery.poll_interval_ms, 5000);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn protocol_parses_snake_case() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [[listeners]]
            name = "push"
            port = 7002
            protocol = "websocket"
            "#,
        )
        .unwrap();
        assert_eq!(config.listeners[0].protocol, ServerProtocol::Websocket);
    }
}
