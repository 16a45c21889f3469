//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Detect listener definitions that collide on the same binding
//! - Validate value ranges (ports, intervals) and prefix shape
//! - Check the discovery endpoint is a usable URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic configuration error.
#[derive(Debug)]
pub enum ValidationError {
    /// No listeners defined; the gateway would accept no traffic.
    NoListeners,
    /// A listener has port 0.
    ZeroPort { listener: String },
    /// Two listeners share a port and would bind the same address.
    DuplicatePort { port: u16 },
    /// Two listeners share a name.
    DuplicateName { name: String },
    /// A push prefix is empty or does not start with '/'.
    InvalidPrefix { prefix: String },
    /// The discovery endpoint is not a usable http(s) URL.
    InvalidEndpoint { endpoint: String, reason: String },
    /// The discovery poll interval is zero.
    ZeroPollInterval,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NoListeners => write!(f, "no listeners configured"),
            ValidationError::ZeroPort { listener } => {
                write!(f, "listener '{}' has port 0", listener)
            }
            ValidationError::DuplicatePort { port } => {
                write!(f, "multiple listeners configured on port {}", port)
            }
            ValidationError::DuplicateName { name } => {
                write!(f, "multiple listeners named '{}'", name)
            }
            ValidationError::InvalidPrefix { prefix } => {
                write!(f, "push prefix '{}' must start with '/'", prefix)
            }
            ValidationError::InvalidEndpoint { endpoint, reason } => {
                write!(f, "discovery endpoint '{}' is invalid: {}", endpoint, reason)
            }
            ValidationError::ZeroPollInterval => {
                write!(f, "discovery poll interval must be greater than zero")
            }
        }
    }
}

/// Validate a parsed configuration, collecting every semantic error.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listeners.is_empty() {
        errors.push(ValidationError::NoListeners);
    }

    let mut seen_ports = HashSet::new();
    let mut seen_names = HashSet::new();
    for listener in &config.listeners {
        if listener.port == 0 {
            errors.push(ValidationError::ZeroPort {
                listener: listener.name.clone(),
            });
        } else if !seen_ports.insert(listener.port) {
            errors.push(ValidationError::DuplicatePort {
                port: listener.port,
            });
        }
        if !seen_names.insert(listener.name.as_str()) {
            errors.push(ValidationError::DuplicateName {
                name: listener.name.clone(),
            });
        }
    }

    for prefix in &config.push_prefixes {
        if !prefix.starts_with('/') {
            errors.push(ValidationError::InvalidPrefix {
                prefix: prefix.clone(),
            });
        }
    }

    match Url::parse(&config.discovery.endpoint) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::InvalidEndpoint {
            endpoint: config.discovery.endpoint.clone(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidEndpoint {
            endpoint: config.discovery.endpoint.clone(),
            reason: e.to_string(),
        }),
    }

    if config.discovery.poll_interval_ms == 0 {
        errors.push(ValidationError::ZeroPollInterval);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ListenerConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&GatewayConfig::default()).is_ok());
    }

    #[test]
    fn empty_listener_set_is_rejected() {
        let mut config = GatewayConfig::default();
        config.listeners.clear();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::NoListeners));
    }

    #[test]
    fn duplicate_port_is_rejected() {
        let mut config = GatewayConfig::default();
        config.listeners.push(ListenerConfig {
            name: "push".to_string(),
            port: config.listeners[0].port,
            ..ListenerConfig::default()
        });
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::DuplicatePort { port: 7001 })));
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = GatewayConfig::default();
        config.listeners[0].port = 0;
        config.push_prefixes.push("jobstatus".to_string());
        config.discovery.endpoint = "not a url".to_string();
        config.discovery.poll_interval_ms = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn non_http_endpoint_is_rejected() {
        let mut config = GatewayConfig::default();
        config.discovery.endpoint = "ftp://master.example.com/leader".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidEndpoint { .. })));
    }
}
