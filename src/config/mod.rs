//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//!
//! At runtime:
//!     discovery bridge writes the leader address
//!     → dynamic.rs (atomic swap of the property value)
//!     → load-balancing layer observes the new value
//! ```
//!
//! # Design Decisions
//! - Static config is immutable once loaded; all fields have defaults
//! - Validation separates syntactic (serde) from semantic checks
//! - Hot-reloadable values live in `dynamic`, never in `GatewayConfig`

pub mod dynamic;
pub mod loader;
pub mod schema;
pub mod validation;

pub use dynamic::{DynamicProperties, StringProperty, UPSTREAM_SERVERS_KEY};
pub use schema::DiscoveryConfig;
pub use schema::GatewayConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
