use http_client::HttpError;
use thiserror::Error;

/// Errors returned by the Pushman client
///
/// Validation variants are raised before any request leaves the process, so a
/// rejected call never has partial side effects. Transport and response errors
/// are surfaced as-is; the client never retries or substitutes fallback values.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed base URL or private key
    ///
    /// Raised while building a `Config`, never per call.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Empty or whitespace-containing event name
    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    /// Whitespace-containing channel name anywhere in a selector
    #[error("Invalid channel: {0}")]
    InvalidChannel(String),

    /// Attempt to delete the protected `public` channel
    #[error("Invalid delete request: {0}")]
    InvalidDeleteRequest(String),

    /// Network failure or non-success status reported by the transport
    #[error("Transport error: {0}")]
    Transport(#[from] HttpError),

    /// Response body was not JSON, or not the shape the operation documents
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    /// Whether the error was raised locally, before any network call
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ApiError::InvalidConfig(_)
                | ApiError::InvalidEvent(_)
                | ApiError::InvalidChannel(_)
                | ApiError::InvalidDeleteRequest(_)
        )
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
