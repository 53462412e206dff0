//! Client configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the first
//! request is built.
//!
//! ## Required Variables
//!
//! - `OXII_BASE_URL` - Root of the service to talk to, e.g. `https://oxii.link`
//!
//! ## Optional Variables
//!
//! - `OXII_TIMEOUT_SECS` - Whole-request deadline in seconds (default: 30)
//! - `OXII_PASTE_PATH` - Path create-paste POSTs go to (default: `/p`;
//!   some deployments accept `/` as well)
//! - `OXII_SHORTEN_PATH` - Path shorten POSTs go to (default: `/s`)
//! - `RUST_LOG` - Log filter (default: `warn`)
//!
//! A `.env` file in the working directory is honored by the binary.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use url::Url;

/// Default whole-request deadline in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection-establishment deadline in seconds.
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Client configuration, validated at load time.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root URL of the service every request is resolved against.
    /// Must be http(s) and carry a host.
    pub base_url: Url,
    /// Path create-paste POSTs go to.
    pub paste_path: String,
    /// Path shorten POSTs go to.
    pub shorten_path: String,
    /// Hard deadline for a whole request. A stalled server trips this
    /// instead of holding the operation open forever.
    pub request_timeout: Duration,
    /// Deadline for establishing the connection.
    pub connect_timeout: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `OXII_BASE_URL` is missing or invalid, or if an
    /// optional variable is present but malformed.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("OXII_BASE_URL").context("OXII_BASE_URL must be set")?;

        let timeout_secs = match env::var("OXII_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("OXII_TIMEOUT_SECS must be an integer number of seconds")?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let paste_path = env::var("OXII_PASTE_PATH").unwrap_or_else(|_| "/p".to_string());
        let shorten_path = env::var("OXII_SHORTEN_PATH").unwrap_or_else(|_| "/s".to_string());

        Self::build(&base_url, paste_path, shorten_path, timeout_secs)
    }

    /// Builds a configuration for a given base URL with default paths and
    /// timeouts. Used when the base URL comes from a CLI flag instead of the
    /// environment.
    pub fn for_base_url(base_url: &str) -> Result<Self> {
        Self::build(
            base_url,
            "/p".to_string(),
            "/s".to_string(),
            DEFAULT_TIMEOUT_SECS,
        )
    }

    fn build(
        base_url: &str,
        paste_path: String,
        shorten_path: String,
        timeout_secs: u64,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("`{base_url}` is not a valid base URL"))?;

        match base_url.scheme() {
            "http" | "https" => {}
            other => bail!("base URL must be http or https, got `{other}`"),
        }
        if base_url.host_str().is_none() {
            bail!("base URL must carry a host");
        }
        if timeout_secs == 0 {
            bail!("request timeout must be nonzero");
        }
        for path in [&paste_path, &shorten_path] {
            if !path.starts_with('/') {
                bail!("endpoint path `{path}` must start with `/`");
            }
        }

        Ok(Self {
            base_url,
            paste_path,
            shorten_path,
            request_timeout: Duration::from_secs(timeout_secs),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https_bases() {
        assert!(Config::for_base_url("http://localhost:3000").is_ok());
        assert!(Config::for_base_url("https://oxii.link").is_ok());
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let result = Config::for_base_url("ftp://oxii.link");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("http"));
    }

    #[test]
    fn test_rejects_garbage_base_url() {
        assert!(Config::for_base_url("not a url").is_err());
    }

    #[test]
    fn test_rejects_non_web_base_url() {
        assert!(Config::for_base_url("unix:/run/oxii.sock").is_err());
    }

    #[test]
    fn test_default_paths_and_timeouts() {
        let config = Config::for_base_url("https://oxii.link").unwrap();
        assert_eq!(config.paste_path, "/p");
        assert_eq!(config.shorten_path, "/s");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
