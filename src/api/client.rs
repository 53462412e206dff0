//! HTTP client issuing the four operations of the contract.
//!
//! One shared pipeline carries every request: a 2xx response yields the body
//! text, anything else becomes [`ClientError::Api`] with the body as the
//! message. Requests run under the configured deadlines, so a stalled server
//! trips a transport error instead of holding an operation open forever.

use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::config::Config;
use crate::domain::entities::ShortCode;
use crate::error::{ClientError, ClientResult};

/// Media type every POST body is sent as.
const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Shared HTTP client bound to one service deployment.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Config,
}

impl ApiClient {
    /// Builds a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: Config) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// POSTs raw URL text to the shorten endpoint and returns the body.
    pub async fn shorten(&self, url_text: &str) -> ClientResult<String> {
        let endpoint = self.endpoint(&self.config.shorten_path)?;
        self.execute(
            self.http
                .post(endpoint)
                .header(CONTENT_TYPE, TEXT_PLAIN)
                .body(url_text.to_owned()),
        )
        .await
    }

    /// POSTs a paste body to the create-paste endpoint and returns the body.
    pub async fn create_paste(&self, body: String) -> ClientResult<String> {
        let endpoint = self.endpoint(&self.config.paste_path)?;
        self.execute(
            self.http
                .post(endpoint)
                .header(CONTENT_TYPE, TEXT_PLAIN)
                .body(body),
        )
        .await
    }

    /// GETs a paste by bare code. Extensions are client-side presentation
    /// and never reach the wire.
    pub async fn read_paste(&self, code: &ShortCode) -> ClientResult<String> {
        let endpoint = self.endpoint(&format!("/{}", code.code()))?;
        self.execute(self.http.get(endpoint)).await
    }

    /// GETs the analytics document for a resolved short link.
    pub async fn fetch_analytics(&self, link: &Url) -> ClientResult<String> {
        self.execute(self.http.get(analytics_url(link))).await
    }

    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        self.config.base_url.join(path).map_err(|_| {
            ClientError::validation(format!("cannot resolve `{path}` against the base URL"))
        })
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> ClientResult<String> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(ClientError::Api {
                status,
                message: body,
            })
        }
    }
}

/// Rewrites a link into its analytics URL by inserting the `a` segment after
/// the authority: `https://host/s/abc` becomes `https://host/a/s/abc`.
pub fn analytics_url(link: &Url) -> Url {
    let mut url = link.clone();
    url.set_path(&format!("/a{}", link.path()));
    url
}
