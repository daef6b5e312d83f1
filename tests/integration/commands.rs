//! End-to-end command execution against a mock server, rendering into files.

use super::test_utils::{file_options, workspace_page};
use clap::Parser;
use httpmock::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;
use tfc::api::Client;
use tfc::cli::{Cli, RunContext};
use tfc::output::{Mode, OutputOptions};

fn context(server: &MockServer, options: OutputOptions) -> RunContext {
    let client = Client::new(&server.base_url(), "t").unwrap();
    RunContext::with_client(client, options, Some("acme".to_string()), 2)
}

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["tfc"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn test_workspace_list_all_to_json_file() {
    let server = MockServer::start();
    for page in 1..=3u64 {
        server.mock(move |when, then| {
            when.method(GET)
                .path("/api/v2/organizations/acme/workspaces")
                .query_param("page[size]", "2")
                .query_param("page[number]", page.to_string());
            let body = match page {
                1 => workspace_page(0, 2, 1, Some(2), 3, 5),
                2 => workspace_page(2, 2, 2, Some(3), 3, 5),
                _ => workspace_page(4, 1, 3, None, 3, 5),
            };
            then.status(200).json_body(body);
        });
    }

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("workspaces.json");
    let ctx = context(&server, file_options(Mode::Json, path.clone()));
    let cli = parse(&["workspace", "list", "--all"]);
    ctx.execute(&cli.command).unwrap();

    let rendered: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let items = rendered.as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[4]["id"], "ws-4");
    // Blank descriptions and `false` locks: the first is pruned, the second kept
    assert!(items[0]["attributes"].get("description").is_none());
    assert_eq!(items[0]["attributes"]["locked"], false);
}

#[test]
fn test_workspace_search_is_encoded() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/organizations/acme/workspaces")
            .query_param("search[name]", "a&b")
            .query_param("page[size]", "2");
        then.status(200).json_body(workspace_page(0, 1, 1, None, 1, 1));
    });

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("search.json");
    let ctx = context(&server, file_options(Mode::Json, path.clone()));
    ctx.execute(&parse(&["workspace", "list", "--search", "a&b"]).command)
        .unwrap();

    mock.assert();
    let rendered: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(rendered.as_array().unwrap().len(), 1);
}

#[test]
fn test_run_show_table_to_file() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/runs/run-1");
        then.status(200).json_body(json!({
            "data": {
                "id": "run-1",
                "type": "runs",
                "attributes": {"status": "planned", "message": "Queued manually", "has-changes": true},
                "relationships": {"plan": {"data": {"id": "plan-1", "type": "plans"}}}
            }
        }));
    });

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("run.txt");
    let ctx = context(&server, file_options(Mode::Table, path.clone()));
    ctx.execute(&parse(&["run", "show", "run-1"]).command).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("FIELD"));
    assert!(lines.iter().any(|l| l.starts_with("Plan ID") && l.ends_with("plan-1")));
    assert!(lines.iter().any(|l| l.starts_with("Apply ID") && l.ends_with('-')));
}

#[test]
fn test_plan_logs_streamed_to_file() {
    let server = MockServer::start();
    let log_url = server.url("/archivist/plan-1");
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/plans/plan-1");
        then.status(200).json_body(json!({
            "data": {
                "id": "plan-1",
                "type": "plans",
                "attributes": {"status": "finished", "log-read-url": log_url}
            }
        }));
    });
    let log_mock = server.mock(|when, then| {
        when.method(GET).path("/archivist/plan-1");
        then.status(200).body("Plan: 2 to add, 0 to change, 0 to destroy.\n");
    });

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("plan.log");
    let ctx = context(&server, file_options(Mode::Table, path.clone()));
    ctx.execute(&parse(&["plan", "logs", "plan-1"]).command).unwrap();

    log_mock.assert();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Plan: 2 to add, 0 to change, 0 to destroy.\n"
    );
}

#[test]
fn test_apply_logs_without_url_is_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/applies/apply-1");
        then.status(200).json_body(json!({
            "data": {"id": "apply-1", "type": "applies", "attributes": {"status": "pending"}}
        }));
    });

    let ctx = context(&server, OutputOptions::default());
    let err = ctx
        .execute(&parse(&["apply", "logs", "apply-1"]).command)
        .unwrap_err();
    assert_eq!(err.kind(), "not_found");
}

#[test]
fn test_variable_create_posts_wrapped_body() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v2/workspaces/ws-1/vars")
            .json_body(json!({
                "data": {
                    "type": "vars",
                    "attributes": {
                        "key": "TF_LOG",
                        "value": "debug",
                        "description": "",
                        "category": "env",
                        "hcl": false,
                        "sensitive": true
                    }
                }
            }));
        then.status(201).json_body(json!({
            "data": {
                "id": "var-9",
                "type": "vars",
                "attributes": {"key": "TF_LOG", "value": null, "category": "env", "sensitive": true}
            }
        }));
    });

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("var.txt");
    let ctx = context(&server, file_options(Mode::Plaintext, path.clone()));
    let cli = parse(&[
        "variable", "create", "--workspace", "ws-1", "--key", "TF_LOG", "--value", "debug",
        "--category", "env", "--sensitive",
    ]);
    ctx.execute(&cli.command).unwrap();

    create.assert();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("Value\t(sensitive)"));
}

#[test]
fn test_workspace_list_requires_org() {
    let server = MockServer::start();
    let client = Client::new(&server.base_url(), "t").unwrap();
    let ctx = RunContext::with_client(client, OutputOptions::default(), None, 20);
    let err = ctx
        .execute(&parse(&["workspace", "list"]).command)
        .unwrap_err();
    assert_eq!(err.kind(), "usage_error");
}
