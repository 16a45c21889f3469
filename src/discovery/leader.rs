//! Cluster leader identity.

use serde::{Deserialize, Serialize};

/// The currently elected master of the backing cluster.
///
/// Immutable value produced by the discovery feed; each notification
/// supersedes the previous descriptor rather than mutating it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LeaderDescriptor {
    /// Host address downstream traffic should target.
    pub host_address: String,

    /// Port of the master's API server.
    pub api_port: u16,
}

impl LeaderDescriptor {
    /// Create a descriptor for the given host and API port.
    pub fn new(host_address: impl Into<String>, api_port: u16) -> Self {
        Self {
            host_address: host_address.into(),
            api_port,
        }
    }

    /// The `host:port` form published to the load-balancing layer.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host_address, self.api_port)
    }
}

impl std::fmt::Display for LeaderDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host_address, self.api_port)
    }
}
