//! Recognizer for the service's own short links.

use regex::Regex;
use url::Url;

/// Matches full short links on one configured host:
/// `http(s)://<host>(:port)/(s/)?<code>(.<ext>)?`.
///
/// The host is taken from the base URL at construction time and escaped, so
/// lookups anchored to one deployment never match links on another.
#[derive(Debug, Clone)]
pub struct ShortLinkMatcher {
    pattern: Regex,
}

impl ShortLinkMatcher {
    pub fn new(base_url: &Url) -> Self {
        let host = regex::escape(base_url.host_str().unwrap_or_default());
        // The escaped host cannot invalidate the pattern.
        let pattern = Regex::new(&format!(
            r"^https?://{host}(?::\d+)?/(?:s/)?[A-Za-z0-9]{{3}}(?:\.[A-Za-z0-9]+)?$"
        ))
        .expect("short link pattern");
        Self { pattern }
    }

    /// True when `candidate` is a full short link on the configured host.
    pub fn is_short_link(&self, candidate: &str) -> bool {
        self.pattern.is_match(candidate)
    }
}
