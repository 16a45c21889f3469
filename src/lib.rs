//! Streamgate — address discovery and request routing for a streaming API
//! gateway.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────────┐
//!                  │                 GATEWAY CORE                      │
//!   master         │  ┌───────────┐   ┌───────────┐   ┌────────────┐  │
//!   discovery ─────┼─▶│ discovery │──▶│ discovery │──▶│  dynamic   │──┼──▶ load-balancing
//!   endpoint       │  │  client   │   │  monitor  │   │ properties │  │    layer
//!                  │  └───────────┘   └───────────┘   └────────────┘  │
//!                  │                                                   │
//!   static         │  ┌───────────┐   ┌────────────────────────────┐  │
//!   config ────────┼─▶│  config   │──▶│  net (listener plan)       │──┼──▶ bootstrap
//!                  │  └───────────┘   └────────────────────────────┘  │    collaborator
//!                  │                                                   │
//!   request        │  ┌────────────────────────────────────────────┐  │
//!   path ──────────┼─▶│  routing (push prefix classification)      │──┼──▶ pipeline
//!                  │  └────────────────────────────────────────────┘  │    dispatch
//!                  │                                                   │
//!                  │  ┌────────────────────────────────────────────┐  │
//!                  │  │  Cross-Cutting: lifecycle, observability   │  │
//!                  │  └────────────────────────────────────────────┘  │
//!                  └──────────────────────────────────────────────────┘
//! ```
//!
//! The bootstrap collaborator binds sockets and installs pipelines; this
//! crate only computes what should be installed and keeps the upstream
//! server list synchronized with cluster leadership.

// Core subsystems
pub mod config;
pub mod discovery;
pub mod net;
pub mod routing;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::dynamic::{DynamicProperties, StringProperty, UPSTREAM_SERVERS_KEY};
pub use config::schema::GatewayConfig;
pub use discovery::client::MasterEndpointClient;
pub use discovery::leader::LeaderDescriptor;
pub use discovery::monitor::MasterMonitor;
pub use lifecycle::Shutdown;
pub use net::plan::{ListenerPlan, PipelineConfig, ServerProtocol};
pub use routing::push::PushPrefixSet;
