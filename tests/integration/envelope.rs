//! Envelope parsing scenarios on raw wire payloads.

use tfc::error::TfcError;
use tfc::jsonapi::{parse_list, parse_single, Document};

fn parse(raw: &str) -> Document {
    serde_json::from_str(raw).unwrap()
}

#[test]
fn test_error_envelope_never_yields_resource() {
    let doc = parse(r#"{"errors":[{"title":"Not Found","detail":"no such id"}],"data":null}"#);

    let err = parse_single(&doc).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("Not Found"));
    assert!(text.contains("no such id"));
    assert!(matches!(err, TfcError::Remote { .. }));
}

#[test]
fn test_errors_win_over_valid_data() {
    let doc = parse(
        r#"{
            "data": {"id": "ws-1", "type": "workspaces", "attributes": {}},
            "errors": [{"status": "422", "title": "invalid", "detail": "name taken"}]
        }"#,
    );
    match parse_single(&doc).unwrap_err() {
        TfcError::Remote { status, message } => {
            assert_eq!(status, Some(422));
            assert_eq!(message, "invalid - name taken");
        }
        other => panic!("expected remote error, got {:?}", other),
    }
    assert!(parse_list(&doc).is_err());
}

#[test]
fn test_list_with_included_and_links() {
    let doc = parse(
        r#"{
            "data": [
                {"id": "run-1", "type": "runs", "attributes": {"status": "applied"},
                 "relationships": {"plan": {"data": {"id": "plan-1", "type": "plans"}}}},
                {"id": "run-2", "type": "runs", "attributes": {"status": "errored"}}
            ],
            "included": [{"id": "plan-1", "type": "plans", "attributes": {"status": "finished"}}],
            "links": {"self": "https://app.terraform.io/api/v2/runs?page%5Bnumber%5D=1"},
            "meta": {"pagination": {"current-page": 1, "page-size": 20, "prev-page": null,
                     "next-page": null, "total-pages": 1, "total-count": 2}}
        }"#,
    );

    let runs = parse_list(&doc).unwrap();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].relationship_id("plan").as_deref(), Some("plan-1"));
    assert_eq!(runs[1].relationship_id("plan"), None);
    assert_eq!(doc.included.len(), 1);

    let p = doc.pagination().unwrap();
    assert_eq!(p.total_count, 2);
    assert_eq!(p.next_page, 0);
    assert!(p.is_last_page());
}

#[test]
fn test_empty_list_data() {
    let doc = parse(r#"{"data": []}"#);
    assert!(parse_list(&doc).unwrap().is_empty());
}
