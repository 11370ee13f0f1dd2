//! Response normalization
//!
//! The service answers every call with JSON. Bodies are first decoded into a
//! generic value and then shaped into the result type of the operation that
//! produced them. Fields the client does not model are kept in `extra`, so a
//! result serializes back to the same field set the service sent.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{ApiError, Result};

/// Arbitrary event payload
pub type Payload = Map<String, Value>;

/// Service-defined fields the client passes through untouched
pub type Fields = Map<String, Value>;

const BODY_PREVIEW_LIMIT: usize = 200;

/// Decode a response body into an operation's result type
///
/// # Errors
///
/// Returns [`ApiError::MalformedResponse`] when the body is not JSON or does
/// not match the expected shape.
pub fn normalize<T: DeserializeOwned>(body: &str) -> Result<T> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        ApiError::MalformedResponse(format!("body is not valid JSON ({}): {}", e, preview(body)))
    })?;

    serde_json::from_value(value).map_err(|e| {
        ApiError::MalformedResponse(format!("unexpected response shape ({}): {}", e, preview(body)))
    })
}

/// Keep a field that was present, even when its value is `null`
///
/// Paired with `#[serde(default)]`, an absent field stays `None` while an
/// explicit `null` becomes `Some(Value::Null)` and serializes back as `null`.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn preview(body: &str) -> &str {
    match body.char_indices().nth(BODY_PREVIEW_LIMIT) {
        Some((index, _)) => &body[..index],
        None => body,
    }
}

/// Result of publishing an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushResult {
    pub status: String,
    #[serde(flatten)]
    pub extra: Fields,
}

/// Metadata of a single channel
///
/// `public` is the channel's public subscription token, or a boolean when the
/// service reports no token. It is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelInfo {
    pub name: String,
    pub public: Value,
    pub id: u64,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub token_expires: Option<Value>,
    #[serde(flatten)]
    pub extra: Fields,
}

/// Public subscription credential for a channel and its expiry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub token: Value,
    pub expires: Value,
}

impl Token {
    /// The token as a string, when the service issued one
    pub fn as_str(&self) -> Option<&str> {
        self.token.as_str()
    }
}

impl From<ChannelInfo> for Token {
    fn from(info: ChannelInfo) -> Self {
        Token {
            token: info.public,
            expires: info.token_expires.unwrap_or(Value::Null),
        }
    }
}

/// A channel reported back by a create call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedChannel {
    pub name: String,
    #[serde(flatten)]
    pub extra: Fields,
}

/// Result of creating channels
///
/// The service answers with one object when one channel was requested and a
/// list otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BuiltChannels {
    Many(Vec<CreatedChannel>),
    Single(CreatedChannel),
}

impl BuiltChannels {
    pub fn len(&self) -> usize {
        match self {
            BuiltChannels::Many(channels) => channels.len(),
            BuiltChannels::Single(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn names(&self) -> Vec<&str> {
        match self {
            BuiltChannels::Many(channels) => channels.iter().map(|c| c.name.as_str()).collect(),
            BuiltChannels::Single(channel) => vec![channel.name.as_str()],
        }
    }

    pub fn into_vec(self) -> Vec<CreatedChannel> {
        match self {
            BuiltChannels::Many(channels) => channels,
            BuiltChannels::Single(channel) => vec![channel],
        }
    }
}

/// Result of a batch delete
///
/// `deleted` and `failed_on` are whatever the service reported, usually a
/// channel name or a list of names. The client does not reinterpret them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResult {
    pub status: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub deleted: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub failed_on: Option<Value>,
    #[serde(flatten)]
    pub extra: Fields,
}

impl DeleteResult {
    /// Whether the service reported no failed channel
    pub fn is_complete(&self) -> bool {
        match &self.failed_on {
            None | Some(Value::Null) => true,
            Some(Value::String(name)) => name.is_empty(),
            Some(Value::Array(names)) => names.is_empty(),
            Some(_) => false,
        }
    }
}
