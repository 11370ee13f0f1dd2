//! Broadcaster capability
//!
//! Host applications that fan events out through a generic "broadcaster"
//! can plug Pushman in via [`PushmanBroadcaster`]. The adapter adds no
//! validation of its own; everything is delegated to
//! [`PushmanClient::push`].

use pushman_api::{ApiError, Config, Payload, PushmanClient};

/// A sink that delivers a named event with a payload to a set of channels
pub trait Broadcaster {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Deliver `event` with `payload` to every channel in `channels`
    fn broadcast(&self, channels: &[String], event: &str, payload: &Payload) -> Result<(), Self::Error>;
}

/// [`Broadcaster`] backed by a Pushman site
#[derive(Debug, Clone)]
pub struct PushmanBroadcaster {
    client: PushmanClient,
}

impl PushmanBroadcaster {
    pub fn new(client: PushmanClient) -> Self {
        Self { client }
    }

    /// Build a broadcaster from `PUSHMAN_PRIVATE` and `PUSHMAN_URL`
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidConfig`] when the key is missing or malformed, or the
    /// URL is invalid.
    pub fn from_env() -> Result<Self, ApiError> {
        let config = Config::from_env()?;
        tracing::debug!(base_url = config.base_url(), "pushman broadcaster configured");
        Ok(Self::new(PushmanClient::new(config)))
    }

    pub fn client(&self) -> &PushmanClient {
        &self.client
    }
}

impl Broadcaster for PushmanBroadcaster {
    type Error = ApiError;

    fn broadcast(&self, channels: &[String], event: &str, payload: &Payload) -> Result<(), ApiError> {
        self.client.push(event, channels, payload)?;
        Ok(())
    }
}

impl From<PushmanClient> for PushmanBroadcaster {
    fn from(client: PushmanClient) -> Self {
        Self::new(client)
    }
}
