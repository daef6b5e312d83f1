//! HTTP transport against a mock Terraform Cloud server.

use httpmock::prelude::*;
use serde_json::json;
use std::io::Read;
use tfc::api::Client;
use tfc::error::TfcError;
use tfc::jsonapi;

#[test]
fn test_get_sends_bearer_and_decodes_document() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/runs/run-1")
            .header("authorization", "Bearer secret-token");
        then.status(200)
            .header("content-type", "application/vnd.api+json")
            .json_body(json!({
                "data": {"id": "run-1", "type": "runs", "attributes": {"status": "applied"}}
            }));
    });

    let client = Client::new(&server.base_url(), "secret-token").unwrap();
    let doc = client.get("/runs/run-1").unwrap();
    let resource = jsonapi::parse_single(&doc).unwrap();

    mock.assert();
    assert_eq!(resource.id, "run-1");
    assert_eq!(resource.attributes["status"], "applied");
}

#[test]
fn test_not_found_envelope_is_remote_404() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/workspaces/ws-missing");
        then.status(404).json_body(json!({
            "errors": [{"status": "404", "title": "not found", "detail": "workspace ws-missing"}]
        }));
    });

    let client = Client::new(&server.base_url(), "t").unwrap();
    let err = client.get("/workspaces/ws-missing").unwrap_err();

    match &err {
        TfcError::Remote { status, message } => {
            assert_eq!(*status, Some(404));
            assert!(message.contains("not found"));
            assert!(message.contains("workspace ws-missing"));
        }
        other => panic!("expected remote error, got {:?}", other),
    }
    assert_eq!(err.kind(), "not_found");
}

#[test]
fn test_non_envelope_error_body_is_truncated() {
    let server = MockServer::start();
    let body = "e".repeat(2000);
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/organizations");
        then.status(502).body(body.as_str());
    });

    let client = Client::new(&server.base_url(), "t").unwrap();
    match client.get("/organizations").unwrap_err() {
        TfcError::Remote { status, message } => {
            assert_eq!(status, Some(502));
            assert!(message.len() <= 503);
            assert!(message.ends_with("..."));
        }
        other => panic!("expected remote error, got {:?}", other),
    }
}

#[test]
fn test_delete_accepts_no_content() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/v2/vars/var-1");
        then.status(204);
    });

    let client = Client::new(&server.base_url(), "t").unwrap();
    client.delete("/vars/var-1").unwrap();
    mock.assert();
}

#[test]
fn test_post_sends_jsonapi_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v2/workspaces/ws-1/vars")
            .header("content-type", "application/vnd.api+json")
            .json_body(json!({
                "data": {"type": "vars", "attributes": {"key": "region"}}
            }));
        then.status(201).json_body(json!({
            "data": {"id": "var-1", "type": "vars", "attributes": {"key": "region"}}
        }));
    });

    let client = Client::new(&server.base_url(), "t").unwrap();
    let body = jsonapi::wrap_for_create("vars", &json!({"key": "region"})).unwrap();
    let doc = client.post("/workspaces/ws-1/vars", &body).unwrap();

    mock.assert();
    assert_eq!(jsonapi::parse_single(&doc).unwrap().id, "var-1");
}

#[test]
fn test_fetch_url_streams_without_credentials() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/archivist/log-1");
        then.status(200).body("Terraform v1.7.5\nPlan: 1 to add\n");
    });

    let client = Client::new("https://unused.invalid", "t").unwrap();
    let mut body = client.fetch_url(&server.url("/archivist/log-1")).unwrap();
    let mut text = String::new();
    body.read_to_string(&mut text).unwrap();

    mock.assert();
    assert_eq!(text, "Terraform v1.7.5\nPlan: 1 to add\n");
}

#[test]
fn test_connection_refused_is_transport_error() {
    // Nothing listens on port 9 (discard) in the test environment
    let client = Client::new("http://127.0.0.1:9", "t").unwrap();
    let err = client.get("/organizations").unwrap_err();
    assert_eq!(err.kind(), "transport_error");
}
