//! Input and result types for the shorten operation.

use serde::Serialize;
use validator::Validate;

/// A URL the user wants shortened.
#[derive(Debug, Validate)]
pub struct ShortenRequest {
    /// The original URL (must look like a URL before deeper checks run).
    #[validate(url(message = "Are you absolutely sure that is a link?"))]
    pub url: String,
}

/// Successful shorten result.
#[derive(Debug, Clone, Serialize)]
pub struct ShortenedLink {
    /// Short URL exactly as the service returned it.
    pub short_url: String,
}
