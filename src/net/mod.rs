//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Static listener configuration
//!     → plan.rs (compute address → pipeline mapping, once)
//!     → Hand off to the bootstrap collaborator
//!     → Collaborator binds sockets and installs pipelines
//! ```
//!
//! # Design Decisions
//! - The plan is computed once at startup, before any traffic is accepted
//! - Duplicate addresses fail construction; no partial plan is ever produced
//! - This crate never opens sockets; binding belongs to the bootstrap layer

pub mod plan;

pub use plan::{ListenerPlan, PipelineConfig, PlanError, ServerProtocol};
