//! Request construction
//!
//! Turns a validated operation request into a complete [`HttpRequest`]. Every
//! request starts with the `private` field. `GET` requests carry their fields
//! in the query string; `POST` and `DELETE` requests carry them as a form
//! body.

use http_client::HttpRequest;
use serde_json::Value;

use crate::config::Config;
use crate::operation::PushmanOperation;

/// Name of the credential field sent with every request
pub const PRIVATE_FIELD: &str = "private";

/// Builds outbound requests for a configured site
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    config: Config,
}

impl RequestBuilder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the full request for an operation
    pub fn build<Op: PushmanOperation>(&self, request: &Op::Request) -> HttpRequest {
        let operation_fields = Op::fields(request);

        let mut fields = Vec::with_capacity(operation_fields.len() + 1);
        fields.push((PRIVATE_FIELD.to_string(), self.config.private_key().to_string()));
        fields.extend(
            operation_fields
                .into_iter()
                .map(|(key, value)| (key.to_string(), value)),
        );

        let url = self.config.endpoint(Op::PATH);

        if Op::METHOD.has_body() {
            HttpRequest::new(Op::METHOD, url).with_form(fields)
        } else {
            HttpRequest::new(Op::METHOD, format!("{}{}", url, query_string(&fields)))
        }
    }
}

/// Render fields as `?key=value&key=value`, in order
///
/// Keys and values are form-urlencoded.
pub fn query_string(fields: &[(String, String)]) -> String {
    let pairs: Vec<String> = fields
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect();

    format!("?{}", pairs.join("&"))
}

fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Encode a channel list as the single JSON string field the service expects
pub fn encode_channels(channels: &[String]) -> String {
    Value::Array(channels.iter().cloned().map(Value::String).collect()).to_string()
}
