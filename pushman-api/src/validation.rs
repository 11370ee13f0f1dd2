//! Input validation
//!
//! Pure checks for event names, channel names and configuration values. None
//! of these functions perform I/O; the client runs them before any request is
//! built so invalid input never reaches the network.

use url::Url;

use crate::channel::{ChannelSelector, PUBLIC_CHANNEL};
use crate::error::{ApiError, Result};

/// Exact length of a Pushman private key
pub const PRIVATE_KEY_LENGTH: usize = 60;

fn has_whitespace(value: &str) -> bool {
    value.chars().any(char::is_whitespace)
}

/// Reject empty or whitespace-containing event names
pub fn validate_event_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ApiError::InvalidEvent("You must provide an event name".to_string()));
    }
    if has_whitespace(name) {
        return Err(ApiError::InvalidEvent(format!(
            "No spaces are allowed in event names: '{}'",
            name
        )));
    }
    Ok(())
}

/// Reject whitespace-containing channel names
///
/// An empty name is not an error here; callers substitute the default channel.
pub fn validate_channel_name(name: &str) -> Result<()> {
    if has_whitespace(name) {
        return Err(ApiError::InvalidChannel(format!(
            "No spaces are allowed in channel names: '{}'",
            name
        )));
    }
    Ok(())
}

/// Resolve a selector to the single channel name used by a lookup
///
/// An empty or omitted selector resolves to `public`. A list is accepted only
/// when it holds at most one name.
pub fn validate_channel_for_lookup(selector: impl Into<ChannelSelector>) -> Result<String> {
    let name = match selector.into() {
        ChannelSelector::Default => return Ok(PUBLIC_CHANNEL.to_string()),
        ChannelSelector::One(name) => name,
        ChannelSelector::Many(mut names) => match names.len() {
            0 => return Ok(PUBLIC_CHANNEL.to_string()),
            1 => names.remove(0),
            n => {
                return Err(ApiError::InvalidChannel(format!(
                    "A channel lookup takes one channel, got {}",
                    n
                )))
            }
        },
    };

    if name.is_empty() {
        return Ok(PUBLIC_CHANNEL.to_string());
    }
    validate_channel_name(&name)?;
    Ok(name)
}

/// Resolve a selector to the list of channel names sent by push, create and delete
///
/// A single name becomes a one-element list and an empty or omitted selector
/// becomes `["public"]`. Every name is checked for whitespace.
pub fn validate_channel_selector_for_batch(selector: impl Into<ChannelSelector>) -> Result<Vec<String>> {
    let names = match selector.into() {
        ChannelSelector::Default => Vec::new(),
        ChannelSelector::One(name) if name.is_empty() => Vec::new(),
        ChannelSelector::One(name) => vec![name],
        ChannelSelector::Many(names) => names,
    };

    if names.is_empty() {
        return Ok(vec![PUBLIC_CHANNEL.to_string()]);
    }

    for name in &names {
        validate_channel_name(name)?;
    }
    Ok(names)
}

/// Refuse any delete that would touch the `public` channel
pub fn ensure_deletable(channels: &[String]) -> Result<()> {
    if channels.iter().any(|name| name == PUBLIC_CHANNEL) {
        return Err(ApiError::InvalidDeleteRequest(
            "You cannot delete the public channel".to_string(),
        ));
    }
    Ok(())
}

/// Check the shape of a private key
///
/// The key is opaque; only its length is checked.
pub fn validate_private_key(key: &str) -> Result<()> {
    let length = key.chars().count();
    if length != PRIVATE_KEY_LENGTH {
        return Err(ApiError::InvalidConfig(format!(
            "A private key is {} characters long, got {}",
            PRIVATE_KEY_LENGTH, length
        )));
    }
    Ok(())
}

/// Normalize and check a service base URL
///
/// Surrounding whitespace and trailing slashes are stripped; the rest must be
/// an absolute URL with a host.
pub fn validate_base_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');

    let parsed = Url::parse(trimmed).map_err(|e| {
        ApiError::InvalidConfig(format!("You must provide a valid URL, '{}' is not: {}", url, e))
    })?;
    if !parsed.has_host() {
        return Err(ApiError::InvalidConfig(format!(
            "You must provide a valid URL, '{}' has no host",
            url
        )));
    }

    Ok(trimmed.to_string())
}
