//! Pushman API operations
//!
//! One [`PushmanOperation`](crate::operation::PushmanOperation) per service
//! endpoint:
//! - `push` - publish an event to one or more channels
//! - `channel` - fetch one channel's metadata
//! - `channels` - list every channel of the site
//! - `build_channel` - create one or more channels
//! - `destroy_channel` - delete one or more channels

pub mod channel;
pub mod push;

pub use channel::*;
pub use push::*;
