//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → push.rs (prefix membership test)
//!     → Return: push/streaming pipeline or standard request/response
//!
//! Prefix Compilation (at startup):
//!     configured prefix list
//!     → Freeze as immutable PushPrefixSet
//!     → shared read-only with every listener binding
//! ```
//!
//! # Design Decisions
//! - Prefix set compiled at startup, immutable at runtime
//! - No regex in the hot path (literal prefix matching only)
//! - Deterministic: same path always classifies the same way
//! - Unmatched paths are standard traffic, never an error

pub mod push;

pub use push::PushPrefixSet;
