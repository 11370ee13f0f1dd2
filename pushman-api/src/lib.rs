//! Type-safe client for the Pushman push/broadcast service
//!
//! This crate validates input, builds requests and shapes responses for the
//! Pushman HTTP API. It uses the private `http-client` crate for transport.
//!
//! ```rust,no_run
//! use pushman_api::{Config, Payload, PushmanClient};
//! use serde_json::json;
//!
//! let client = PushmanClient::new(Config::from_env()?);
//!
//! let mut payload = Payload::new();
//! payload.insert("message".to_string(), json!("Hello!"));
//! client.push("greeting", ["lobby", "news"], &payload)?;
//!
//! let created = client.build_channel("announcements")?;
//! let removed = client.destroy_channel(["old_room", "stale_room"])?;
//! if let (false, Some(failed)) = (removed.is_complete(), &removed.failed_on) {
//!     println!("service could not delete: {}", failed);
//! }
//! # let _ = created;
//! # Ok::<(), pushman_api::ApiError>(())
//! ```
//!
//! Every operation validates its input before sending anything:
//! - event names must be non-empty and contain no whitespace
//! - channel names must contain no whitespace
//! - the `public` channel can never be deleted

pub mod channel;
pub mod client;
pub mod config;
pub mod error;
pub mod operation;
pub mod operations;
pub mod request;
pub mod response;
pub mod validation;

pub use channel::{ChannelSelector, PUBLIC_CHANNEL};
pub use client::PushmanClient;
pub use config::{Config, DEFAULT_URL};
pub use error::{ApiError, Result};
pub use operation::PushmanOperation;
pub use response::{BuiltChannels, ChannelInfo, CreatedChannel, DeleteResult, Payload, PushResult, Token};

pub use http_client::{HttpClient, HttpError, HttpRequest, Method, RawResponse, Transport};
