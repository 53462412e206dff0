//! Shorten operation: validate, submit once, hand back the short link.

use std::sync::Arc;

use tracing::debug;
use validator::Validate;

use crate::api::client::ApiClient;
use crate::api::dto::first_message;
use crate::api::dto::shorten::{ShortenRequest, ShortenedLink};
use crate::domain::flight::{OpState, SingleFlight};
use crate::error::{ClientError, ClientResult};
use crate::utils::short_link::ShortLinkMatcher;
use crate::utils::url_guard::parse_shorten_target;

/// Service for shortening URLs.
pub struct ShortenService {
    client: Arc<ApiClient>,
    own_links: ShortLinkMatcher,
    flight: SingleFlight,
}

impl ShortenService {
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

    /// Runs one shorten submission.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Busy`] when a submission is already in flight;
    ///   the call is dropped without side effects, nothing is queued.
    /// - [`ClientError::Validation`] when the input does not pass the URL
    ///   checks; no request is issued.
    /// - [`ClientError::Api`] / [`ClientError::Transport`] from the wire.
    pub async fn shorten(&self, raw: &str) -> ClientResult<ShortenedLink> {
        let Some(_permit) = self.flight.try_acquire() else {
            debug!("shorten dropped: already in flight");
            return Err(ClientError::Busy);
        };

        let request = ShortenRequest {
            url: raw.trim().to_owned(),
        };
        request
            .validate()
            .map_err(|errors| ClientError::validation(first_message(&errors)))?;
        let target = parse_shorten_target(&request.url, &self.own_links)?;

        debug!(url = %target, "shortening");
        let body = self.client.shorten(target.as_str()).await?;

        Ok(ShortenedLink {
            short_url: body.trim().to_owned(),
        })
    }
}
