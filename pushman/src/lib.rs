//! # Pushman
//!
//! Publish events to a Pushman site and manage its channels:
//!
//! ```rust,no_run
//! use pushman::{Config, Payload, PushmanClient};
//!
//! let client = PushmanClient::new(Config::from_env()?);
//!
//! client.push("order_shipped", ["orders", "admin"], &Payload::new())?;
//! for channel in client.channels()? {
//!     println!("{} (id {})", channel.name, channel.id);
//! }
//! # Ok::<(), pushman::ApiError>(())
//! ```
//!
//! Applications that already route events through a generic broadcaster can
//! use [`PushmanBroadcaster`] instead:
//!
//! ```rust,no_run
//! use pushman::{Broadcaster, Payload, PushmanBroadcaster};
//!
//! let broadcaster = PushmanBroadcaster::from_env()?;
//! broadcaster.broadcast(&["lobby".to_string()], "user_joined", &Payload::new())?;
//! # Ok::<(), pushman::ApiError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! pushman (broadcaster, logging)
//!     ↓
//! pushman-api (validation, requests, responses)
//!     ↓
//! http-client (blocking transport)
//! ```

pub mod broadcaster;
pub mod logging;

pub use broadcaster::{Broadcaster, PushmanBroadcaster};

pub use pushman_api::{
    ApiError, BuiltChannels, ChannelInfo, ChannelSelector, Config, CreatedChannel, DeleteResult,
    HttpClient, HttpError, HttpRequest, Method, Payload, PushResult, PushmanClient, RawResponse,
    Result, Token, Transport, DEFAULT_URL, PUBLIC_CHANNEL,
};
