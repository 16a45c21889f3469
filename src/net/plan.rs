//! Listener plan construction.
//!
//! # Responsibilities
//! - Map each configured port to the pipeline configuration for its listener
//! - Reproduce the fixed edge policy for every binding
//! - Fail fast on listener definitions that collide on an address
//!
//! # Design Decisions
//! - Wildcard bind address per port, matching how the edge is deployed
//! - The push prefix set is shared read-only across all bindings
//! - Immutable after construction; the bootstrap collaborator owns the result

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::schema::ListenerConfig;
use crate::routing::push::PushPrefixSet;

/// Protocol flavor installed on a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ServerProtocol {
    #[default]
    Http,
    Http2,
    HttpMutualTls,
    Websocket,
    Sse,
}

/// Per-listener pipeline configuration.
///
/// The policy fields are fixed: forwarded-client-IP headers are always
/// trusted, the proxy-protocol preamble is off, and the listener determines
/// the scheme itself rather than assuming TLS was terminated upstream.
/// These settings may need to be tweaked when running behind an LB TCP
/// listener instead of directly on the network.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Protocol flavor for connections accepted on this listener.
    pub protocol: ServerProtocol,
    /// Trust forwarded-client-IP headers from any upstream.
    pub trust_forwarded_headers: bool,
    /// Expect a proxy-protocol preamble on accepted connections.
    pub with_proxy_protocol: bool,
    /// Assume TLS was terminated by an intermediary.
    pub tls_from_intermediary: bool,
    /// Prefixes that select the push/streaming pipeline.
    pub push_prefixes: Arc<PushPrefixSet>,
}

impl PipelineConfig {
    fn for_listener(protocol: ServerProtocol, push_prefixes: Arc<PushPrefixSet>) -> Self {
        Self {
            protocol,
            trust_forwarded_headers: true,
            with_proxy_protocol: false,
            tls_from_intermediary: false,
            push_prefixes,
        }
    }
}

/// Error type for listener plan construction.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Two listener definitions resolve to the same socket address.
    #[error("listener '{name}' resolves to duplicate address {address}")]
    DuplicateAddress { name: String, address: SocketAddr },
}

/// Immutable mapping from socket address to pipeline configuration.
///
/// Computed once, synchronously, before any traffic is accepted, then handed
/// to the bootstrap collaborator which binds the sockets.
#[derive(Debug, Clone)]
pub struct ListenerPlan {
    bindings: HashMap<SocketAddr, PipelineConfig>,
}

impl ListenerPlan {
    /// Compute the plan for the configured listeners.
    ///
    /// Returns an error, and no partial plan, if two listeners resolve to
    /// the same address.
    pub fn from_config(
        listeners: &[ListenerConfig],
        push_prefixes: Arc<PushPrefixSet>,
    ) -> Result<Self, PlanError> {
        let mut bindings = HashMap::with_capacity(listeners.len());

        for listener in listeners {
            let address = SocketAddr::from(([0, 0, 0, 0], listener.port));
            let pipeline = PipelineConfig::for_listener(listener.protocol, push_prefixes.clone());

            if bindings.insert(address, pipeline).is_some() {
                return Err(PlanError::DuplicateAddress {
                    name: listener.name.clone(),
                    address,
                });
            }

            tracing::info!(
                listener = %listener.name,
                address = %address,
                protocol = ?listener.protocol,
                "listener address configured"
            );
        }

        Ok(Self { bindings })
    }

    /// The address → pipeline mapping.
    pub fn bindings(&self) -> &HashMap<SocketAddr, PipelineConfig> {
        &self.bindings
    }

    /// Pipeline configuration for a bound address, if planned.
    pub fn get(&self, address: &SocketAddr) -> Option<&PipelineConfig> {
        self.bindings.get(address)
    }

    /// Number of planned bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True if no bindings were planned.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
