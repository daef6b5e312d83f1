//! Run views.

use super::shared::{bool_str, default_str, null_default, records, short_date, truncate_str, Record};
use crate::error::TfcError;
use crate::jsonapi::Resource;
use crate::output::TableData;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const MESSAGE_WIDTH: usize = 50;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RunAttributes {
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    #[serde(deserialize_with = "null_default")]
    pub source: String,
    #[serde(deserialize_with = "null_default")]
    pub message: String,
    #[serde(deserialize_with = "null_default")]
    pub is_destroy: bool,
    #[serde(deserialize_with = "null_default")]
    pub has_changes: bool,
    #[serde(deserialize_with = "null_default")]
    pub auto_apply: bool,
    #[serde(deserialize_with = "null_default")]
    pub created_at: String,
    pub status_timestamps: Value,
}

pub type RunRecord = Record<RunAttributes>;

/// Run detail with the linked plan and apply ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RunDetail {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_id: Option<String>,
    pub attributes: RunAttributes,
}

pub fn run_list(resources: &[Resource]) -> Result<(TableData, Vec<RunRecord>), TfcError> {
    let records: Vec<RunRecord> = records(resources)?;
    let mut table = TableData::new(["ID", "STATUS", "MESSAGE", "SOURCE", "CHANGES", "CREATED"]);
    for r in &records {
        let a = &r.attributes;
        table.push_row([
            r.id.clone(),
            a.status.clone(),
            truncate_str(&a.message, MESSAGE_WIDTH),
            a.source.clone(),
            if a.has_changes { "yes".to_string() } else { String::new() },
            short_date(&a.created_at),
        ]);
    }
    Ok((table, records))
}

pub fn run_detail(resource: &Resource) -> Result<(TableData, RunDetail), TfcError> {
    let attributes: RunAttributes = resource.unmarshal_attributes()?;
    let detail = RunDetail {
        id: resource.id.clone(),
        plan_id: resource.relationship_id("plan"),
        apply_id: resource.relationship_id("apply"),
        attributes,
    };
    let a = &detail.attributes;
    let table = TableData::field_value([
        ("ID", detail.id.clone()),
        ("Status", a.status.clone()),
        ("Message", a.message.clone()),
        ("Source", a.source.clone()),
        ("Is Destroy", bool_str(a.is_destroy).to_string()),
        ("Has Changes", bool_str(a.has_changes).to_string()),
        ("Auto Apply", bool_str(a.auto_apply).to_string()),
        ("Plan ID", default_str(detail.plan_id.as_deref().unwrap_or(""), "-").to_string()),
        ("Apply ID", default_str(detail.apply_id.as_deref().unwrap_or(""), "-").to_string()),
        ("Created", a.created_at.clone()),
    ]);
    Ok((table, detail))
}
