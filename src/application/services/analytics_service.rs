//! Analytics lookup: resolve the target, fetch, decode named fields.

use std::sync::Arc;

use tracing::debug;
use url::Url;

use crate::api::client::ApiClient;
use crate::api::decode::decode_analytics;
use crate::api::dto::lookup::LinkReport;
use crate::domain::entities::ShortCode;
use crate::domain::flight::{OpState, SingleFlight};
use crate::error::{ClientError, ClientResult};
use crate::utils::short_link::ShortLinkMatcher;
use crate::utils::url_guard::NOT_A_LINK;

/// Service for looking up usage counters of a short link or paste.
pub struct AnalyticsService {
    client: Arc<ApiClient>,
    own_links: ShortLinkMatcher,
    flight: SingleFlight,
}

impl AnalyticsService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        let own_links = ShortLinkMatcher::new(&client.config().base_url);
        Self {
            client,
            own_links,
            flight: SingleFlight::new(),
        }
    }

    /// Current submission state of this operation.
    pub fn state(&self) -> OpState {
        self.flight.state()
    }

    /// Runs one analytics lookup.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Busy`] when a lookup is already in flight.
    /// - [`ClientError::Validation`] when the target is neither a short link
    ///   on the configured host nor a bare code; no request issued.
    /// - [`ClientError::Analytics`] when the body cannot be decoded.
    /// - [`ClientError::Api`] / [`ClientError::Transport`] from the wire.
    pub async fn lookup(&self, target: &str) -> ClientResult<LinkReport> {
        let Some(_permit) = self.flight.try_acquire() else {
            debug!("analytics lookup dropped: already in flight");
            return Err(ClientError::Busy);
        };

        let link = self.resolve_target(target.trim())?;

        debug!(link = %link, "looking up analytics");
        let body = self.client.fetch_analytics(&link).await?;
        let analytics = decode_analytics(&body)?;

        Ok(LinkReport {
            link: link.to_string(),
            analytics,
        })
    }

    /// Accepts a full short link on the configured host, or a bare
    /// `code`/`code.ext` resolved against the base URL.
    fn resolve_target(&self, raw: &str) -> ClientResult<Url> {
        if self.own_links.is_short_link(raw) {
            return Url::parse(raw).map_err(|_| ClientError::validation(NOT_A_LINK));
        }

        if let Ok(code) = raw.parse::<ShortCode>() {
            let base = &self.client.config().base_url;
            return base
                .join(&code.to_string())
                .map_err(|_| ClientError::validation(NOT_A_LINK));
        }

        Err(ClientError::validation(NOT_A_LINK))
    }
}
