//! Paste operations: create a paste, read one back.
//!
//! Create and read are distinct operations and each owns its own
//! single-flight state, so a slow upload never blocks a fetch.

use std::sync::Arc;

use tracing::debug;
use validator::Validate;

use crate::api::client::ApiClient;
use crate::api::dto::first_message;
use crate::api::dto::paste::{CreatePasteRequest, CreatedPaste};
use crate::domain::entities::ShortCode;
use crate::domain::flight::{OpState, SingleFlight};
use crate::error::{ClientError, ClientResult};
use crate::utils::short_link::ShortLinkMatcher;

/// Service for creating and reading pastes.
pub struct PasteService {
    client: Arc<ApiClient>,
    own_links: ShortLinkMatcher,
    create_flight: SingleFlight,
    read_flight: SingleFlight,
}

impl PasteService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        let own_links = ShortLinkMatcher::new(&client.config().base_url);
        Self {
            client,
            own_links,
            create_flight: SingleFlight::new(),
            read_flight: SingleFlight::new(),
        }
    }

    pub fn create_state(&self) -> OpState {
        self.create_flight.state()
    }

    pub fn read_state(&self) -> OpState {
        self.read_flight.state()
    }

    /// Submits a new paste.
    ///
    /// Empty bodies, non-alphabetic filetypes, and bodies that are nothing
    /// but a link back to the service are rejected before anything is sent.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Busy`] when a create is already in flight.
    /// - [`ClientError::Validation`] on input rejection; no request issued.
    /// - [`ClientError::Api`] / [`ClientError::Transport`] from the wire.
    pub async fn create(&self, body: &str, filetype: &str) -> ClientResult<CreatedPaste> {
        let Some(_permit) = self.create_flight.try_acquire() else {
            debug!("create paste dropped: already in flight");
            return Err(ClientError::Busy);
        };

        let request = CreatePasteRequest {
            body: body.to_owned(),
            filetype: filetype.trim().to_owned(),
        };
        request
            .validate()
            .map_err(|errors| ClientError::validation(first_message(&errors)))?;
        if self.own_links.is_short_link(request.body.trim()) {
            return Err(ClientError::validation(
                "Refusing to paste a link to this service",
            ));
        }

        debug!(bytes = request.body.len(), "creating paste");
        let location = self.client.create_paste(request.body).await?;

        let filetype = (!request.filetype.is_empty()).then_some(request.filetype);
        Ok(CreatedPaste {
            location: location.trim().to_owned(),
            filetype,
        })
    }

    /// Fetches a paste body by `code` or `code.ext` reference.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Busy`] when a read is already in flight.
    /// - [`ClientError::Validation`] when the reference is not a short code.
    /// - [`ClientError::Api`] / [`ClientError::Transport`] from the wire.
    pub async fn read(&self, reference: &str) -> ClientResult<String> {
        let Some(_permit) = self.read_flight.try_acquire() else {
            debug!("read paste dropped: already in flight");
            return Err(ClientError::Busy);
        };

        let code: ShortCode = reference.trim().parse()?;

        debug!(code = %code, "fetching paste");
        self.client.read_paste(&code).await
    }
}
