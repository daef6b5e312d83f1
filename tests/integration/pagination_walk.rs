//! Pagination walker over the real HTTP client.

use super::test_utils::workspace_page;
use httpmock::prelude::*;
use serde_json::json;
use tfc::api::Client;
use tfc::pagination::{collect_all, walk_pages};

#[test]
fn test_walk_three_pages_in_order() {
    let server = MockServer::start();
    let pages = [
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/v2/organizations/acme/workspaces")
                .query_param("page[size]", "2")
                .query_param("page[number]", "1");
            then.status(200).json_body(workspace_page(0, 2, 1, Some(2), 3, 5));
        }),
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/v2/organizations/acme/workspaces")
                .query_param("page[number]", "2");
            then.status(200).json_body(workspace_page(2, 2, 2, Some(3), 3, 5));
        }),
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/v2/organizations/acme/workspaces")
                .query_param("page[number]", "3");
            then.status(200).json_body(workspace_page(4, 1, 3, None, 3, 5));
        }),
    ];

    let client = Client::new(&server.base_url(), "t").unwrap();
    let mut seen: Vec<Vec<String>> = Vec::new();
    walk_pages(&client, "/organizations/acme/workspaces?page[size]=2", |page| {
        seen.push(page.into_iter().map(|r| r.id).collect());
    })
    .unwrap();

    for page in &pages {
        page.assert_hits(1);
    }
    assert_eq!(
        seen,
        vec![
            vec!["ws-0".to_string(), "ws-1".to_string()],
            vec!["ws-2".to_string(), "ws-3".to_string()],
            vec!["ws-4".to_string()],
        ]
    );
}

#[test]
fn test_error_mid_walk_keeps_delivered_pages() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/runs").query_param("page[number]", "1");
        then.status(200).json_body(workspace_page(0, 2, 1, Some(2), 2, 4));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/runs").query_param("page[number]", "2");
        then.status(500).json_body(json!({
            "errors": [{"status": "500", "title": "internal", "detail": "boom"}]
        }));
    });

    let client = Client::new(&server.base_url(), "t").unwrap();
    let mut delivered = 0usize;
    let err = walk_pages(&client, "/runs", |page| delivered += page.len()).unwrap_err();

    assert_eq!(delivered, 2);
    assert_eq!(err.kind(), "api_error");
    assert!(err.to_string().contains("internal - boom"));
}

#[test]
fn test_missing_meta_stops_after_first_page() {
    let server = MockServer::start();
    let first = server.mock(|when, then| {
        when.method(GET).path("/api/v2/workspaces/ws-1/vars");
        then.status(200).json_body(json!({
            "data": [{"id": "var-1", "type": "vars", "attributes": {"key": "a"}}]
        }));
    });

    let client = Client::new(&server.base_url(), "t").unwrap();
    let all = collect_all(&client, "/workspaces/ws-1/vars").unwrap();

    first.assert_hits(1);
    assert_eq!(all.len(), 1);
}
