use http_client::Method;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::response;

/// Base trait for all Pushman API operations
///
/// Each endpoint of the service is described by one implementation: where the
/// request goes, which fields it carries, and how the response body maps into
/// a typed result. The `private` field is added by the
/// [`RequestBuilder`](crate::request::RequestBuilder) and must not be returned
/// from [`fields`](PushmanOperation::fields).
pub trait PushmanOperation {
    /// Validated request data for this operation
    type Request;

    /// The typed result this operation returns
    type Response: DeserializeOwned;

    /// Short name used in logs
    const NAME: &'static str;

    /// HTTP method of the endpoint
    const METHOD: Method;

    /// Path of the endpoint, starting with `/`
    const PATH: &'static str;

    /// Build the ordered request fields, excluding `private`
    fn fields(request: &Self::Request) -> Vec<(&'static str, String)>;

    /// Parse the raw response body into the typed response
    fn parse_response(body: &str) -> Result<Self::Response> {
        response::normalize(body)
    }
}
