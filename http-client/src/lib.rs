//! Private HTTP transport for the Pushman client
//!
//! This crate provides the transport boundary the Pushman API talks through:
//! a request description, a raw response, the [`Transport`] trait, and a
//! blocking implementation built on `ureq`. It knows nothing about events or
//! channels.

mod error;
mod request;

pub use error::HttpError;
pub use request::{HttpRequest, Method, RawResponse};

use std::sync::Arc;
use std::time::Duration;

/// Something that can deliver a request and hand back the raw response
///
/// Implementations must be safe to share between threads; a single transport
/// handle is reused by every clone of a client.
pub trait Transport: Send + Sync {
    /// Send the request and return the raw response
    ///
    /// Non-success statuses are reported as [`HttpError::Status`] rather than
    /// as a response.
    fn send(&self, request: &HttpRequest) -> Result<RawResponse, HttpError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: &HttpRequest) -> Result<RawResponse, HttpError> {
        (**self).send(request)
    }
}

/// A minimal blocking HTTP client for the Pushman service
#[derive(Debug, Clone)]
pub struct HttpClient {
    agent: ureq::Agent,
}

impl HttpClient {
    /// Create a new client with default timeouts (connect 5s, read 10s)
    pub fn new() -> Self {
        Self::with_timeouts(Duration::from_secs(5), Duration::from_secs(10))
    }

    /// Create a client with explicit connect and read timeouts
    pub fn with_timeouts(connect: Duration, read: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(connect)
                .timeout_read(read)
                .build(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpClient {
    fn send(&self, request: &HttpRequest) -> Result<RawResponse, HttpError> {
        let call = self.agent.request(request.method.as_str(), &request.url);

        let result = if request.method.has_body() {
            let form: Vec<(&str, &str)> = request
                .form
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            call.send_form(&form)
        } else {
            call.call()
        };

        let response = match result {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let body = response.into_string().unwrap_or_default();
                tracing::debug!(code, method = %request.method, "service returned error status");
                return Err(HttpError::Status { code, body });
            }
            Err(e) => return Err(HttpError::Network(e.to_string())),
        };

        let status = response.status();
        let body = response
            .into_string()
            .map_err(|e| HttpError::Body(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}
