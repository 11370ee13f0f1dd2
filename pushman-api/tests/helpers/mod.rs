//! Test helpers for client behaviour tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use pushman_api::{Config, HttpError, HttpRequest, PushmanClient, RawResponse, Transport};

/// A 60-character private key accepted by `Config`
pub const TEST_KEY: &str = "abcdefghijabcdefghijabcdefghijabcdefghijabcdefghijabcdefghij";

pub const TEST_URL: &str = "http://pushman.test";

/// Transport double that records every request and replays canned responses
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<Result<RawResponse, HttpError>>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A transport that answers the first request with `body`
    pub fn replying(body: &str) -> Arc<Self> {
        let transport = Self::new();
        transport.push_body(body);
        transport
    }

    pub fn push_body(&self, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(RawResponse::ok(body)));
    }

    pub fn push_error(&self, error: HttpError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &HttpRequest) -> Result<RawResponse, HttpError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::Network("no canned response left".to_string())))
    }
}

pub fn test_config() -> Config {
    Config::new(TEST_KEY, Some(TEST_URL)).expect("test config should be valid")
}

pub fn client_with(transport: &Arc<MockTransport>) -> PushmanClient {
    PushmanClient::with_transport(test_config(), transport.clone())
}

/// A 9-field channel body as the service returns it
pub fn channel_body(name: &str) -> String {
    serde_json::json!({
        "id": 1,
        "name": name,
        "public": "tok123",
        "token_expires": "2025-01-01",
        "refreshes": "yes",
        "max_connections": 0,
        "active_users": 2,
        "events_fired": 17,
        "created_at": "2015-05-20 12:00:00"
    })
    .to_string()
}
