//! List views: every table row has exactly one JSON element with the same id,
//! and every row is as wide as the header.

use serde_json::{json, Value};
use tfc::cli::{
    organization_list, run_list, state_version_list, variable_list, workspace_list,
};
use tfc::jsonapi::Resource;
use tfc::output::TableData;

fn resources(resource_type: &str, attributes: Vec<Value>) -> Vec<Resource> {
    attributes
        .into_iter()
        .enumerate()
        .map(|(i, attrs)| {
            serde_json::from_value(json!({
                "id": format!("{}-{}", resource_type, i),
                "type": resource_type,
                "attributes": attrs
            }))
            .unwrap()
        })
        .collect()
}

fn assert_parity(table: &TableData, json: Value, id_column: Option<usize>) {
    let items = json.as_array().unwrap();
    assert_eq!(table.rows.len(), items.len());
    for (row, item) in table.rows.iter().zip(items) {
        assert_eq!(row.len(), table.headers.len());
        assert!(item.get("attributes").is_some());
        if let Some(col) = id_column {
            assert_eq!(item["id"], Value::String(row[col].clone()));
        }
    }
}

#[test]
fn test_workspace_list_parity() {
    let input = resources(
        "workspaces",
        vec![
            json!({"name": "a", "locked": true}),
            json!({"name": "b", "description": null}),
            json!({}),
        ],
    );
    let (table, records) = workspace_list(&input).unwrap();
    assert_parity(&table, serde_json::to_value(&records).unwrap(), Some(0));
}

#[test]
fn test_run_list_parity() {
    let input = resources(
        "runs",
        vec![json!({"status": "applied", "message": "m"}), json!({"message": null})],
    );
    let (table, records) = run_list(&input).unwrap();
    assert_parity(&table, serde_json::to_value(&records).unwrap(), Some(0));
}

#[test]
fn test_state_version_list_parity() {
    let input = resources("state-versions", vec![json!({"serial": 1}), json!({"serial": 2})]);
    let (table, records) = state_version_list(&input).unwrap();
    assert_parity(&table, serde_json::to_value(&records).unwrap(), Some(0));
}

#[test]
fn test_variable_list_parity() {
    let input = resources(
        "vars",
        vec![
            json!({"key": "a", "value": "1"}),
            json!({"key": "b", "value": null, "sensitive": true}),
        ],
    );
    let (table, records) = variable_list(&input).unwrap();
    assert_parity(&table, serde_json::to_value(&records).unwrap(), Some(0));
}

#[test]
fn test_organization_list_parity() {
    let input = resources("organizations", vec![json!({"name": "acme"}), json!({"name": "globex"})]);
    let (table, records) = organization_list(&input).unwrap();
    let json = serde_json::to_value(&records).unwrap();
    assert_parity(&table, json.clone(), None);
    // Organizations are listed by name rather than id
    for (row, item) in table.rows.iter().zip(json.as_array().unwrap()) {
        assert_eq!(item["name"], Value::String(row[0].clone()));
    }
}

#[test]
fn test_invalid_attribute_type_is_decode_error() {
    let input = resources("workspaces", vec![json!({"resource-count": "many"})]);
    let err = workspace_list(&input).unwrap_err();
    assert_eq!(err.kind(), "decode_error");
}

/// Every FIELD label of a detail table maps to a key in its JSON value, and no
/// label is left unmapped.
fn assert_detail_parity(table: &TableData, json: Value, mapping: &[(&str, &str)]) {
    let labels: Vec<&str> = table.rows.iter().map(|r| r[0].as_str()).collect();
    let mapped: Vec<&str> = mapping.iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, mapped);
    for (label, pointer) in mapping {
        assert!(json.pointer(pointer).is_some(), "{} -> {} missing", label, pointer);
    }
}

fn single(resource_type: &str, attributes: Value, relationships: Value) -> Resource {
    serde_json::from_value(json!({
        "id": format!("{}-1", resource_type),
        "type": resource_type,
        "attributes": attributes,
        "relationships": relationships
    }))
    .unwrap()
}

#[test]
fn test_detail_views_field_parity() {
    use tfc::cli::{
        apply_detail, organization_detail, plan_detail, run_detail, state_version_detail,
        variable_detail, workspace_detail,
    };

    let (table, detail) = workspace_detail(&single("workspaces", json!({}), json!({}))).unwrap();
    assert_detail_parity(
        &table,
        serde_json::to_value(&detail).unwrap(),
        &[
            ("ID", "/id"),
            ("Name", "/attributes/name"),
            ("Description", "/attributes/description"),
            ("Terraform Version", "/attributes/terraform-version"),
            ("Execution Mode", "/attributes/execution-mode"),
            ("Auto Apply", "/attributes/auto-apply"),
            ("Working Directory", "/attributes/working-directory"),
            ("Resource Count", "/attributes/resource-count"),
            ("Locked", "/attributes/locked"),
            ("Tags", "/attributes/tag-names"),
            ("Created", "/attributes/created-at"),
            ("Updated", "/attributes/updated-at"),
        ],
    );

    let relationships = json!({
        "plan": {"data": {"id": "plan-1", "type": "plans"}},
        "apply": {"data": {"id": "apply-1", "type": "applies"}}
    });
    let (table, detail) = run_detail(&single("runs", json!({}), relationships)).unwrap();
    assert_detail_parity(
        &table,
        serde_json::to_value(&detail).unwrap(),
        &[
            ("ID", "/id"),
            ("Status", "/attributes/status"),
            ("Message", "/attributes/message"),
            ("Source", "/attributes/source"),
            ("Is Destroy", "/attributes/is-destroy"),
            ("Has Changes", "/attributes/has-changes"),
            ("Auto Apply", "/attributes/auto-apply"),
            ("Plan ID", "/plan-id"),
            ("Apply ID", "/apply-id"),
            ("Created", "/attributes/created-at"),
        ],
    );

    let (table, detail) = plan_detail(&single("plans", json!({}), json!({}))).unwrap();
    assert_detail_parity(
        &table,
        serde_json::to_value(&detail).unwrap(),
        &[
            ("ID", "/id"),
            ("Status", "/attributes/status"),
            ("Has Changes", "/attributes/has-changes"),
            ("Additions", "/attributes/resource-additions"),
            ("Changes", "/attributes/resource-changes"),
            ("Destructions", "/attributes/resource-destructions"),
            ("Imports", "/attributes/resource-imports"),
        ],
    );

    let (table, detail) = apply_detail(&single("applies", json!({}), json!({}))).unwrap();
    assert_detail_parity(
        &table,
        serde_json::to_value(&detail).unwrap(),
        &[
            ("ID", "/id"),
            ("Status", "/attributes/status"),
            ("Additions", "/attributes/resource-additions"),
            ("Changes", "/attributes/resource-changes"),
            ("Destructions", "/attributes/resource-destructions"),
            ("Imports", "/attributes/resource-imports"),
        ],
    );

    let (table, detail) =
        state_version_detail(&single("state-versions", json!({}), json!({}))).unwrap();
    assert_detail_parity(
        &table,
        serde_json::to_value(&detail).unwrap(),
        &[
            ("ID", "/id"),
            ("Serial", "/attributes/serial"),
            ("Size", "/attributes/size"),
            ("Resources Processed", "/attributes/resources-processed"),
            ("Created", "/attributes/created-at"),
        ],
    );

    let (table, detail) = variable_detail(&single("vars", json!({}), json!({}))).unwrap();
    assert_detail_parity(
        &table,
        serde_json::to_value(&detail).unwrap(),
        &[
            ("ID", "/id"),
            ("Key", "/attributes/key"),
            ("Value", "/attributes/value"),
            ("Description", "/attributes/description"),
            ("Category", "/attributes/category"),
            ("HCL", "/attributes/hcl"),
            ("Sensitive", "/attributes/sensitive"),
            ("Created", "/attributes/created-at"),
        ],
    );

    let (table, detail) =
        organization_detail(&single("organizations", json!({}), json!({}))).unwrap();
    assert_detail_parity(
        &table,
        serde_json::to_value(&detail).unwrap(),
        &[
            ("Name", "/name"),
            ("External ID", "/attributes/external-id"),
            ("Email", "/attributes/email"),
            ("Plan", "/attributes/plan-identifier"),
            ("Managed Resources", "/attributes/managed-resource-count"),
            ("Execution Mode", "/attributes/default-execution-mode"),
            ("SSO Enabled", "/attributes/sso-enabled"),
            ("Created", "/attributes/created-at"),
        ],
    );
}
