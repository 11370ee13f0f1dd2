//! Client configuration
//!
//! A [`Config`] is validated once when it is built and is immutable
//! afterwards; the client never re-checks it per call.

use std::fmt;

use crate::error::{ApiError, Result};
use crate::validation::{validate_base_url, validate_private_key};

/// Base URL of the hosted Pushman service
pub const DEFAULT_URL: &str = "http://live.pushman.dfl.mn";

/// Environment variable holding the private key
pub const PRIVATE_KEY_ENV: &str = "PUSHMAN_PRIVATE";

/// Environment variable holding an optional base URL override
pub const URL_ENV: &str = "PUSHMAN_URL";

/// Validated connection settings for a Pushman site
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
    private_key: String,
}

impl Config {
    /// Build a configuration from a private key and an optional base URL
    ///
    /// A missing or blank URL falls back to [`DEFAULT_URL`]. Surrounding
    /// whitespace and trailing slashes are stripped from the URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidConfig`] when the key is not exactly 60
    /// characters or the URL is not an absolute URL with a host.
    pub fn new(private_key: impl Into<String>, url: Option<&str>) -> Result<Self> {
        let private_key = private_key.into();
        validate_private_key(&private_key)?;

        let url = match url {
            Some(url) if !url.trim().is_empty() => url,
            _ => DEFAULT_URL,
        };
        let base_url = validate_base_url(url)?;

        Ok(Self { base_url, private_key })
    }

    /// Build a configuration from `PUSHMAN_PRIVATE` and `PUSHMAN_URL`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from any variable source
    ///
    /// `lookup` receives [`PRIVATE_KEY_ENV`] and [`URL_ENV`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let private_key = lookup(PRIVATE_KEY_ENV)
            .ok_or_else(|| ApiError::InvalidConfig(format!("{} is not set", PRIVATE_KEY_ENV)))?;
        let url = lookup(URL_ENV);

        Self::new(private_key, url.as_deref())
    }

    /// The normalized base URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    /// Join an API path onto the base URL
    ///
    /// `path` must start with `/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("private_key", &"<redacted>")
            .finish()
    }
}
