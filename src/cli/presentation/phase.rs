//! Plan and apply views. Both phases share resource counters and a log URL.

use super::shared::{bool_str, null_default, Record};
use crate::error::TfcError;
use crate::jsonapi::Resource;
use crate::output::TableData;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ExecutionDetails {
    #[serde(deserialize_with = "null_default")]
    pub mode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PlanAttributes {
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    #[serde(deserialize_with = "null_default")]
    pub log_read_url: String,
    #[serde(deserialize_with = "null_default")]
    pub resource_additions: u64,
    #[serde(deserialize_with = "null_default")]
    pub resource_changes: u64,
    #[serde(deserialize_with = "null_default")]
    pub resource_destructions: u64,
    #[serde(deserialize_with = "null_default")]
    pub resource_imports: u64,
    #[serde(deserialize_with = "null_default")]
    pub has_changes: bool,
    #[serde(deserialize_with = "null_default")]
    pub execution_details: ExecutionDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApplyAttributes {
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    #[serde(deserialize_with = "null_default")]
    pub log_read_url: String,
    #[serde(deserialize_with = "null_default")]
    pub resource_additions: u64,
    #[serde(deserialize_with = "null_default")]
    pub resource_changes: u64,
    #[serde(deserialize_with = "null_default")]
    pub resource_destructions: u64,
    #[serde(deserialize_with = "null_default")]
    pub resource_imports: u64,
}

pub type PlanRecord = Record<PlanAttributes>;
pub type ApplyRecord = Record<ApplyAttributes>;

/// Which phase of a run a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Plan,
    Apply,
}

impl Phase {
    pub fn path(self, id: &str) -> String {
        match self {
            Phase::Plan => format!("/plans/{}", id),
            Phase::Apply => format!("/applies/{}", id),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Plan => "plan",
            Phase::Apply => "apply",
        }
    }
}

pub fn plan_detail(resource: &Resource) -> Result<(TableData, PlanRecord), TfcError> {
    let record: PlanRecord = Record::from_resource(resource)?;
    let a = &record.attributes;
    let table = TableData::field_value([
        ("ID", record.id.clone()),
        ("Status", a.status.clone()),
        ("Has Changes", bool_str(a.has_changes).to_string()),
        ("Additions", a.resource_additions.to_string()),
        ("Changes", a.resource_changes.to_string()),
        ("Destructions", a.resource_destructions.to_string()),
        ("Imports", a.resource_imports.to_string()),
    ]);
    Ok((table, record))
}

pub fn apply_detail(resource: &Resource) -> Result<(TableData, ApplyRecord), TfcError> {
    let record: ApplyRecord = Record::from_resource(resource)?;
    let a = &record.attributes;
    let table = TableData::field_value([
        ("ID", record.id.clone()),
        ("Status", a.status.clone()),
        ("Additions", a.resource_additions.to_string()),
        ("Changes", a.resource_changes.to_string()),
        ("Destructions", a.resource_destructions.to_string()),
        ("Imports", a.resource_imports.to_string()),
    ]);
    Ok((table, record))
}

/// Log URL of a plan or apply, or `NotFound` when the phase has none yet.
pub fn log_read_url(phase: Phase, resource: &Resource) -> Result<String, TfcError> {
    #[derive(Deserialize, Default)]
    #[serde(default, rename_all = "kebab-case")]
    struct LogFields {
        #[serde(deserialize_with = "null_default")]
        status: String,
        #[serde(deserialize_with = "null_default")]
        log_read_url: String,
    }
    let fields: LogFields = resource.unmarshal_attributes()?;
    if fields.log_read_url.is_empty() {
        return Err(TfcError::NotFound(format!(
            "no log URL available for {} {} (status: {})",
            phase.label(),
            resource.id,
            fields.status
        )));
    }
    Ok(fields.log_read_url)
}
