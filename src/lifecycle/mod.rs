//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Validate → Compute listener plan → Start discovery
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Broadcast → Tasks drain and exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then the plan, then background tasks
//! - A clean shutdown stops the discovery tasks without logging the
//!   feed-terminated degraded state

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
