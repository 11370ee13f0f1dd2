//! End-to-end tests through the real HTTP transport
//!
//! A local mock server plays the Pushman service so the full path from
//! client method to wire format and back is exercised.

mod helpers;

use helpers::{channel_body, TEST_KEY};
use mockito::{Matcher, Server};
use pushman_api::{ApiError, Config, HttpError, Payload, PushmanClient};
use serde_json::json;

fn client_for(server: &Server) -> PushmanClient {
    PushmanClient::new(Config::new(TEST_KEY, Some(server.url().as_str())).unwrap())
}

#[test]
fn test_push_over_http() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/push")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("private".into(), TEST_KEY.into()),
            Matcher::UrlEncoded("channels".into(), r#"["lobby"]"#.into()),
            Matcher::UrlEncoded("event".into(), "user_joined".into()),
            Matcher::UrlEncoded("payload".into(), r#"{"id":7}"#.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"success","message":"Event pushed successfully"}"#)
        .create();

    let payload: Payload = json!({"id": 7}).as_object().cloned().unwrap();
    let result = client_for(&server).push("user_joined", "lobby", &payload).unwrap();

    assert_eq!(result.status, "success");
    mock.assert();
}

#[test]
fn test_token_over_http() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/channel")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("private".into(), TEST_KEY.into()),
            Matcher::UrlEncoded("channel".into(), "public".into()),
        ]))
        .with_status(200)
        .with_body(channel_body("public"))
        .create();

    let token = client_for(&server).token("public").unwrap();

    assert_eq!(token.as_str(), Some("tok123"));
    assert_eq!(token.expires, json!("2025-01-01"));
    mock.assert();
}

#[test]
fn test_destroy_over_http() {
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", "/api/channel")
        .match_body(Matcher::UrlEncoded("channel".into(), r#"["a","b"]"#.into()))
        .with_status(200)
        .with_body(r#"{"status":"success","deleted":["a","b"],"failed_on":[]}"#)
        .create();

    let result = client_for(&server).destroy_channel(["a", "b"]).unwrap();

    assert!(result.is_complete());
    mock.assert();
}

#[test]
fn test_error_status_over_http() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/api/channels")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body(r#"{"status":"failure","message":"Invalid private key"}"#)
        .create();

    match client_for(&server).channels() {
        Err(ApiError::Transport(HttpError::Status { code, .. })) => assert_eq!(code, 403),
        other => panic!("Expected transport status error, got {:?}", other),
    }
}

#[test]
fn test_html_body_is_malformed_response() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/api/channels")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create();

    assert!(matches!(
        client_for(&server).channels(),
        Err(ApiError::MalformedResponse(_))
    ));
}
