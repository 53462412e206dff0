//! # Oxii
//!
//! Command-line client for OxiiLink-style paste and link-shortening services.
//!
//! ## Architecture
//!
//! This crate follows a layered structure with clear separation:
//!
//! - **Domain Layer** ([`domain`]) - Short codes, analytics counters, and
//!   per-operation submission state
//! - **Application Layer** ([`application`]) - Per-operation services running
//!   the validate → submit → decode cycle
//! - **Wire Layer** ([`api`]) - HTTP client, plain-text decoding, and typed
//!   operation inputs/results
//! - **CLI** (`oxii` binary) - Subcommands and the interactive prompt loop
//!
//! ## Features
//!
//! - Client-side validation that mirrors the service's own rejection rules
//! - Explicit per-operation single-flight state: concurrent submissions of
//!   the same operation are dropped, never queued or retried
//! - Named-field decoding of plain-text analytics documents
//! - Request deadlines so a stalled server cannot wedge an operation
//!
//! ## Quick Start
//!
//! ```bash
//! export OXII_BASE_URL="https://oxii.link"
//!
//! oxii shorten https://example.com/some/long/path
//! oxii paste new notes.txt --filetype txt
//! oxii info https://oxii.link/s/abc
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`]; see the
//! [`config`] module for available options.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod utils;

pub use config::Config;
pub use error::{ClientError, ClientResult};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::client::ApiClient;
    pub use crate::api::dto::lookup::LinkReport;
    pub use crate::api::dto::paste::CreatedPaste;
    pub use crate::api::dto::shorten::ShortenedLink;
    pub use crate::application::services::{AnalyticsService, PasteService, ShortenService};
    pub use crate::config::Config;
    pub use crate::domain::entities::{LinkAnalytics, ShortCode};
    pub use crate::domain::flight::OpState;
    pub use crate::error::{ClientError, ClientResult};
}
