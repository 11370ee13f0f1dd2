use std::fmt;
use std::sync::Arc;

use http_client::{HttpClient, Transport};

use crate::channel::ChannelSelector;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::operation::PushmanOperation;
use crate::operations::{
    BuildChannelOperation, ChannelBatchRequest, ChannelInfoOperation, ChannelLookupRequest,
    ChannelsOperation, DestroyChannelOperation, PushOperation, PushRequest,
};
use crate::request::RequestBuilder;
use crate::response::{BuiltChannels, ChannelInfo, DeleteResult, Payload, PushResult, Token};
use crate::validation::{
    ensure_deletable, validate_channel_for_lookup, validate_channel_selector_for_batch,
    validate_event_name,
};

/// A client for a single Pushman site
///
/// Each method performs one synchronous request/response cycle. Input is
/// validated before anything is sent, so a rejected call has no side effects.
/// Clones share the same transport, and the client can be used from several
/// threads at once.
///
/// # Example
/// ```rust,no_run
/// use pushman_api::{Config, PushmanClient, Payload};
///
/// let config = Config::new("your-60-character-private-key...", None)?;
/// let client = PushmanClient::new(config);
///
/// client.push("user_joined", "lobby", &Payload::new())?;
/// let token = client.token("lobby")?;
/// # Ok::<(), pushman_api::ApiError>(())
/// ```
#[derive(Clone)]
pub struct PushmanClient {
    builder: RequestBuilder,
    transport: Arc<dyn Transport>,
}

impl PushmanClient {
    /// Create a client that talks to the service over HTTP
    pub fn new(config: Config) -> Self {
        Self::with_transport(config, HttpClient::new())
    }

    /// Create a client over a custom transport
    ///
    /// Useful for custom timeouts, proxies, or test doubles.
    pub fn with_transport<T: Transport + 'static>(config: Config, transport: T) -> Self {
        Self {
            builder: RequestBuilder::new(config),
            transport: Arc::new(transport),
        }
    }

    pub fn config(&self) -> &Config {
        self.builder.config()
    }

    /// Publish an event to one or more channels
    ///
    /// An empty selector publishes to `public`. The payload is sent as its
    /// JSON text.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidEvent`] or [`ApiError::InvalidChannel`] before any
    /// request; otherwise whatever the transport or decoding reports.
    pub fn push(
        &self,
        event: &str,
        channels: impl Into<ChannelSelector>,
        payload: &Payload,
    ) -> Result<PushResult> {
        validate_event_name(event)?;
        let channels = validate_channel_selector_for_batch(channels)?;

        self.execute::<PushOperation>(&PushRequest::new(event, channels, payload))
    }

    /// Fetch one channel's metadata
    ///
    /// An empty selector looks up `public`.
    pub fn channel(&self, channel: impl Into<ChannelSelector>) -> Result<ChannelInfo> {
        let channel = validate_channel_for_lookup(channel)?;

        self.execute::<ChannelInfoOperation>(&ChannelLookupRequest { channel })
    }

    /// Fetch a channel's public subscription token and its expiry
    pub fn token(&self, channel: impl Into<ChannelSelector>) -> Result<Token> {
        self.channel(channel).map(Token::from)
    }

    /// List every channel of the site
    pub fn channels(&self) -> Result<Vec<ChannelInfo>> {
        self.execute::<ChannelsOperation>(&())
    }

    /// Create one or more channels
    pub fn build_channel(&self, channels: impl Into<ChannelSelector>) -> Result<BuiltChannels> {
        let channels = validate_channel_selector_for_batch(channels)?;

        self.execute::<BuildChannelOperation>(&ChannelBatchRequest { channels })
    }

    /// Delete one or more channels
    ///
    /// The service may delete some channels and report the rest in
    /// `failed_on`; the result is returned as the service sent it.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidDeleteRequest`] when the selector names `public`,
    /// including when an empty selector resolves to it.
    pub fn destroy_channel(&self, channels: impl Into<ChannelSelector>) -> Result<DeleteResult> {
        let channels = validate_channel_selector_for_batch(channels)?;
        ensure_deletable(&channels)?;

        self.execute::<DestroyChannelOperation>(&ChannelBatchRequest { channels })
    }

    fn execute<Op: PushmanOperation>(&self, request: &Op::Request) -> Result<Op::Response> {
        let http_request = self.builder.build::<Op>(request);

        tracing::debug!(
            operation = Op::NAME,
            method = %Op::METHOD,
            path = Op::PATH,
            "sending request"
        );

        let response = self.transport.send(&http_request).map_err(|e| {
            tracing::warn!(operation = Op::NAME, error = %e, "request failed");
            ApiError::Transport(e)
        })?;

        Op::parse_response(&response.body)
    }
}

impl fmt::Debug for PushmanClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushmanClient")
            .field("config", self.config())
            .finish_non_exhaustive()
    }
}
