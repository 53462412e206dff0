//! Client error types.
//!
//! Two kinds of failure dominate: **validation failures**, which are caught
//! before anything goes on the wire, and **request failures**, where the
//! service answered with a non-2xx status and a plain-text explanation as the
//! body. Everything else covers the transport and decoding machinery around
//! them. No variant is fatal; every failure returns the operation to idle.

use reqwest::StatusCode;
use thiserror::Error;

use crate::api::decode::AnalyticsDecodeError;

pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Input rejected client-side; no request was issued.
    #[error("{message}")]
    Validation { message: String },

    /// Dropped because the same operation is already in flight.
    ///
    /// Submissions are dropped, not queued; user-facing layers surface
    /// nothing for this variant.
    #[error("operation already in flight")]
    Busy,

    /// The service answered with a non-2xx status.
    ///
    /// `message` is the response body, which the service fills with a
    /// human-readable explanation.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// Connection, TLS, timeout, or protocol failure below the contract.
    #[error("request failed: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// An analytics body did not carry the expected named fields.
    #[error("could not decode analytics response: {source}")]
    Analytics {
        #[from]
        source: AnalyticsDecodeError,
    },
}

impl ClientError {
    /// Builds a validation failure with a user-facing guidance message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// True when the failure was a request deadline expiring.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { source } if source.is_timeout())
    }
}
