//! Domain layer containing the client's core data model and operation state.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (short codes, analytics counters)
//! - [`flight`] - Explicit per-operation single-flight submission state
//!
//! # Design Principles
//!
//! - Domain types have no dependency on the wire or presentation layers
//! - Each operation owns its own submission state; nothing is process-global
//! - Submissions attempted while the same operation is in flight are dropped,
//!   never queued or retried

pub mod entities;
pub mod flight;
