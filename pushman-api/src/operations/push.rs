use http_client::Method;
use serde_json::Value;

use crate::operation::PushmanOperation;
use crate::request::encode_channels;
use crate::response::{Payload, PushResult};

/// Request to publish an event
///
/// The payload is encoded to its JSON text once, when the request is built,
/// and travels as a plain string field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushRequest {
    pub event: String,
    pub channels: Vec<String>,
    pub payload: String,
}

impl PushRequest {
    pub fn new(event: impl Into<String>, channels: Vec<String>, payload: &Payload) -> Self {
        Self {
            event: event.into(),
            channels,
            payload: Value::Object(payload.clone()).to_string(),
        }
    }
}

/// `POST /api/push`
pub struct PushOperation;

impl PushmanOperation for PushOperation {
    type Request = PushRequest;
    type Response = PushResult;

    const NAME: &'static str = "push";
    const METHOD: Method = Method::Post;
    const PATH: &'static str = "/api/push";

    fn fields(request: &Self::Request) -> Vec<(&'static str, String)> {
        vec![
            ("channels", encode_channels(&request.channels)),
            ("event", request.event.clone()),
            ("payload", request.payload.clone()),
        ]
    }
}
