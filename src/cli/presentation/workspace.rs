//! Workspace views.

use super::shared::{bool_str, default_str, null_default, records, short_date, Record};
use crate::error::TfcError;
use crate::jsonapi::Resource;
use crate::output::TableData;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WorkspaceAttributes {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(deserialize_with = "null_default")]
    pub terraform_version: String,
    #[serde(deserialize_with = "null_default")]
    pub auto_apply: bool,
    #[serde(deserialize_with = "null_default")]
    pub working_directory: String,
    #[serde(deserialize_with = "null_default")]
    pub execution_mode: String,
    #[serde(deserialize_with = "null_default")]
    pub resource_count: u64,
    #[serde(deserialize_with = "null_default")]
    pub locked: bool,
    #[serde(deserialize_with = "null_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_default")]
    pub tag_names: Vec<String>,
}

pub type WorkspaceRecord = Record<WorkspaceAttributes>;

pub fn workspace_list(resources: &[Resource]) -> Result<(TableData, Vec<WorkspaceRecord>), TfcError> {
    let records: Vec<WorkspaceRecord> = records(resources)?;
    let mut table = TableData::new([
        "ID", "NAME", "TF VERSION", "EXEC MODE", "RESOURCES", "LOCKED", "UPDATED",
    ]);
    for r in &records {
        let a = &r.attributes;
        table.push_row([
            r.id.clone(),
            a.name.clone(),
            a.terraform_version.clone(),
            a.execution_mode.clone(),
            a.resource_count.to_string(),
            if a.locked { "LOCKED".to_string() } else { String::new() },
            short_date(&a.updated_at),
        ]);
    }
    Ok((table, records))
}

pub fn workspace_detail(resource: &Resource) -> Result<(TableData, WorkspaceRecord), TfcError> {
    let record: WorkspaceRecord = Record::from_resource(resource)?;
    let a = &record.attributes;
    let tags = a.tag_names.join(", ");
    let table = TableData::field_value([
        ("ID", record.id.clone()),
        ("Name", a.name.clone()),
        ("Description", default_str(&a.description, "-").to_string()),
        ("Terraform Version", a.terraform_version.clone()),
        ("Execution Mode", a.execution_mode.clone()),
        ("Auto Apply", bool_str(a.auto_apply).to_string()),
        ("Working Directory", default_str(&a.working_directory, "/").to_string()),
        ("Resource Count", a.resource_count.to_string()),
        ("Locked", bool_str(a.locked).to_string()),
        ("Tags", default_str(&tags, "-").to_string()),
        ("Created", a.created_at.clone()),
        ("Updated", a.updated_at.clone()),
    ]);
    Ok((table, record))
}

/// Body for `POST /workspaces/:id/actions/lock`.
#[derive(Debug, Clone, Serialize)]
pub struct LockRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
