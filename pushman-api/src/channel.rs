//! Channel selectors
//!
//! Every operation that takes channels accepts anything convertible into a
//! [`ChannelSelector`]: a single name, a list of names, or nothing at all.

/// The default channel. It always exists and can never be deleted.
pub const PUBLIC_CHANNEL: &str = "public";

/// A caller-supplied channel argument, before normalization
///
/// Selectors keep the order the caller gave and are not deduplicated.
/// Normalization happens in [`crate::validation`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChannelSelector {
    /// No channel given; resolves to `public`
    #[default]
    Default,
    /// A single channel name
    One(String),
    /// An ordered list of channel names
    Many(Vec<String>),
}

impl From<&str> for ChannelSelector {
    fn from(name: &str) -> Self {
        ChannelSelector::One(name.to_string())
    }
}

impl From<String> for ChannelSelector {
    fn from(name: String) -> Self {
        ChannelSelector::One(name)
    }
}

impl From<&String> for ChannelSelector {
    fn from(name: &String) -> Self {
        ChannelSelector::One(name.clone())
    }
}

impl From<Vec<String>> for ChannelSelector {
    fn from(names: Vec<String>) -> Self {
        ChannelSelector::Many(names)
    }
}

impl From<Vec<&str>> for ChannelSelector {
    fn from(names: Vec<&str>) -> Self {
        ChannelSelector::Many(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&[String]> for ChannelSelector {
    fn from(names: &[String]) -> Self {
        ChannelSelector::Many(names.to_vec())
    }
}

impl From<&[&str]> for ChannelSelector {
    fn from(names: &[&str]) -> Self {
        ChannelSelector::Many(names.iter().map(|name| name.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ChannelSelector {
    fn from(names: [&str; N]) -> Self {
        ChannelSelector::Many(names.iter().map(|name| name.to_string()).collect())
    }
}

impl<T: Into<ChannelSelector>> From<Option<T>> for ChannelSelector {
    fn from(selector: Option<T>) -> Self {
        selector.map(Into::into).unwrap_or_default()
    }
}
