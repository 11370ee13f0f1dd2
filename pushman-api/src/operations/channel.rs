//! Channel management operations
//!
//! Lookup and listing are `GET` requests; creation and deletion send the
//! channel list as a JSON-encoded `channel` form field.

use http_client::Method;

use crate::operation::PushmanOperation;
use crate::request::encode_channels;
use crate::response::{BuiltChannels, ChannelInfo, DeleteResult};

// =============================================================================
// CHANNEL LOOKUP
// =============================================================================

/// Request for a single channel's metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelLookupRequest {
    pub channel: String,
}

/// `GET /api/channel`
pub struct ChannelInfoOperation;

impl PushmanOperation for ChannelInfoOperation {
    type Request = ChannelLookupRequest;
    type Response = ChannelInfo;

    const NAME: &'static str = "channel";
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/api/channel";

    fn fields(request: &Self::Request) -> Vec<(&'static str, String)> {
        vec![("channel", request.channel.clone())]
    }
}

// =============================================================================
// CHANNEL LISTING
// =============================================================================

/// `GET /api/channels`
pub struct ChannelsOperation;

impl PushmanOperation for ChannelsOperation {
    type Request = ();
    type Response = Vec<ChannelInfo>;

    const NAME: &'static str = "channels";
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/api/channels";

    fn fields(_request: &Self::Request) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

// =============================================================================
// CREATE / DELETE
// =============================================================================

/// Request naming a batch of channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelBatchRequest {
    pub channels: Vec<String>,
}

/// `POST /api/channel`
pub struct BuildChannelOperation;

impl PushmanOperation for BuildChannelOperation {
    type Request = ChannelBatchRequest;
    type Response = BuiltChannels;

    const NAME: &'static str = "build_channel";
    const METHOD: Method = Method::Post;
    const PATH: &'static str = "/api/channel";

    fn fields(request: &Self::Request) -> Vec<(&'static str, String)> {
        vec![("channel", encode_channels(&request.channels))]
    }
}

/// `DELETE /api/channel`
pub struct DestroyChannelOperation;

impl PushmanOperation for DestroyChannelOperation {
    type Request = ChannelBatchRequest;
    type Response = DeleteResult;

    const NAME: &'static str = "destroy_channel";
    const METHOD: Method = Method::Delete;
    const PATH: &'static str = "/api/channel";

    fn fields(request: &Self::Request) -> Vec<(&'static str, String)> {
        vec![("channel", encode_channels(&request.channels))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_endpoint_table() {
        assert_eq!((ChannelInfoOperation::METHOD, ChannelInfoOperation::PATH), (Method::Get, "/api/channel"));
        assert_eq!((ChannelsOperation::METHOD, ChannelsOperation::PATH), (Method::Get, "/api/channels"));
        assert_eq!((BuildChannelOperation::METHOD, BuildChannelOperation::PATH), (Method::Post, "/api/channel"));
        assert_eq!(
            (DestroyChannelOperation::METHOD, DestroyChannelOperation::PATH),
            (Method::Delete, "/api/channel")
        );
    }

    #[test]
    fn test_lookup_sends_plain_name() {
        let request = ChannelLookupRequest { channel: "news".to_string() };
        assert_eq!(ChannelInfoOperation::fields(&request), vec![("channel", "news".to_string())]);
    }

    #[test]
    fn test_batch_sends_json_list() {
        let request = ChannelBatchRequest { channels: vec!["my_channel".to_string()] };
        assert_eq!(
            BuildChannelOperation::fields(&request),
            vec![("channel", r#"["my_channel"]"#.to_string())]
        );
        assert_eq!(
            DestroyChannelOperation::fields(&request),
            vec![("channel", r#"["my_channel"]"#.to_string())]
        );
    }

    #[test]
    fn test_partial_failure_delete_body_is_unmodified() {
        let body = r#"{"status":"success","deleted":"my_channel","failed_on":"public","message":"public cannot be deleted"}"#;
        let result = DestroyChannelOperation::parse_response(body).unwrap();

        let round_trip = serde_json::to_value(&result).unwrap();
        let object = round_trip.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert_eq!(object["deleted"], "my_channel");
        assert_eq!(object["failed_on"], "public");
    }

    #[test]
    fn test_channel_list_parsing() {
        let body = r#"[
            {"id":1,"name":"public","public":"tok1","token_expires":"2025-01-01"},
            {"id":2,"name":"news","public":"tok2","token_expires":"2025-01-02"}
        ]"#;
        let channels = ChannelsOperation::parse_response(body).unwrap();
        assert_eq!(channels.len(), 2);
        assert_eq!(channels[1].name, "news");
    }

    #[test]
    fn test_channel_lookup_rejects_garbage() {
        let result = ChannelInfoOperation::parse_response("Whoops, looks like something went wrong.");
        assert!(matches!(result, Err(ApiError::MalformedResponse(_))));
    }
}
