//! Core entities of the client's data model.
//!
//! # Entity Types
//!
//! - [`ShortCode`] - 3-character alphanumeric identifier with optional extension
//! - [`LinkAnalytics`] - Usage counters and creation time for one entry
//!
//! Entities are plain data; the shapes they enforce mirror what the service
//! accepts, so malformed identifiers are rejected before a request exists.

pub mod analytics;
pub mod short_code;

pub use analytics::{CREATED_FORMAT, LinkAnalytics};
pub use short_code::{CODE_LENGTH, ShortCode};
