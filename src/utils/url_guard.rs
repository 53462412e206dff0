//! Shorten-target parsing and rejection rules.
//!
//! Mirrors the checks the service applies on its side, so inputs it would
//! refuse never generate a request.

use url::Url;

use crate::error::{ClientError, ClientResult};
use crate::utils::short_link::ShortLinkMatcher;

/// Guidance shown when an input does not look like a shortenable link.
pub(crate) const NOT_A_LINK: &str = "Are you absolutely sure that is a link?";

/// Parses a shorten target and rejects anything the service would refuse:
/// non-HTTP(S) schemes, credential-carrying URLs, hostless URLs, and links
/// that already point at the service itself.
pub fn parse_shorten_target(raw: &str, own_links: &ShortLinkMatcher) -> ClientResult<Url> {
    let url = Url::parse(raw).map_err(|_| ClientError::validation(NOT_A_LINK))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(ClientError::validation(NOT_A_LINK)),
    }
    if url.host_str().is_none() || !url.username().is_empty() {
        return Err(ClientError::validation(NOT_A_LINK));
    }
    if own_links.is_short_link(url.as_str()) {
        return Err(ClientError::validation("Cannot shorten this URL"));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn own_links() -> ShortLinkMatcher {
        ShortLinkMatcher::new(&Url::parse("https://oxii.link").unwrap())
    }

    #[test]
    fn test_accepts_ordinary_urls() {
        let url = parse_shorten_target("https://example.com/test", &own_links()).unwrap();
        assert_eq!(url.as_str(), "https://example.com/test");
    }

    #[test]
    fn test_rejects_non_urls() {
        for raw in ["", "example", "example dot com", "www.example.com"] {
            let err = parse_shorten_target(raw, &own_links()).unwrap_err();
            assert!(matches!(err, ClientError::Validation { .. }), "{raw}");
        }
    }

    #[test]
    fn test_rejects_non_http_schemes() {
        for raw in ["ftp://example.com", "javascript:alert(1)", "data:text/plain,hi"] {
            assert!(parse_shorten_target(raw, &own_links()).is_err(), "{raw}");
        }
    }

    #[test]
    fn test_rejects_credentialed_urls() {
        assert!(parse_shorten_target("https://user@example.com/", &own_links()).is_err());
    }

    #[test]
    fn test_rejects_the_services_own_links() {
        let err = parse_shorten_target("https://oxii.link/s/abc", &own_links()).unwrap_err();
        assert!(err.to_string().contains("Cannot shorten"));
    }
}
