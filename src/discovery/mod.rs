//! Cluster master discovery subsystem.
//!
//! # Data Flow
//! ```text
//! master discovery endpoint (HTTP, JSON)
//!     → client.rs (poll, change detection)
//!     → bounded channel of Option<LeaderDescriptor>
//!     → monitor.rs (single consumer, serialized writes)
//!     → dynamic upstream-servers property
//!     → read by the load-balancing layer
//! ```
//!
//! # Design Decisions
//! - The feed is a single-consumer channel, so leader updates apply strictly
//!   in delivery order regardless of producer threading
//! - An absent leader never clears the property (last-known-good)
//! - Feed termination degrades to serving the last address; it is logged and
//!   recorded in metrics rather than treated as fatal

pub mod client;
pub mod leader;
pub mod monitor;

pub use client::MasterEndpointClient;
pub use leader::LeaderDescriptor;
pub use monitor::MasterMonitor;
