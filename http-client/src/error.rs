//! Error types for the HTTP transport

use thiserror::Error;

/// Errors that can occur while talking to the Pushman service
#[derive(Debug, Error)]
pub enum HttpError {
    /// Connection, DNS, TLS or timeout failure before a response arrived
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The service answered with a non-success status
    #[error("HTTP status {code}: {body}")]
    Status { code: u16, body: String },

    /// The response arrived but its body could not be read
    #[error("Failed to read response body: {0}")]
    Body(String),
}

impl HttpError {
    /// The HTTP status code, if the service answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        let err = HttpError::Status { code: 404, body: "missing".to_string() };
        assert_eq!(err.status(), Some(404));
        assert_eq!(HttpError::Network("refused".to_string()).status(), None);
    }

    #[test]
    fn test_error_display() {
        let err = HttpError::Status { code: 500, body: "boom".to_string() };
        assert_eq!(format!("{}", err), "HTTP status 500: boom");

        let err = HttpError::Network("connection refused".to_string());
        assert_eq!(format!("{}", err), "Network/HTTP error: connection refused");
    }
}
