//! State version views.

use super::shared::{bool_str, null_default, records, short_date, Record};
use crate::error::TfcError;
use crate::jsonapi::Resource;
use crate::output::TableData;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StateVersionAttributes {
    #[serde(deserialize_with = "null_default")]
    pub serial: u64,
    #[serde(deserialize_with = "null_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_default")]
    pub size: u64,
    #[serde(deserialize_with = "null_default")]
    pub resources_processed: bool,
    pub modules: Value,
    #[serde(deserialize_with = "null_default")]
    pub hosted_state_download_url: String,
}

pub type StateVersionRecord = Record<StateVersionAttributes>;

pub fn state_version_list(
    resources: &[Resource],
) -> Result<(TableData, Vec<StateVersionRecord>), TfcError> {
    let records: Vec<StateVersionRecord> = records(resources)?;
    let mut table = TableData::new(["ID", "SERIAL", "SIZE", "CREATED"]);
    for r in &records {
        let a = &r.attributes;
        table.push_row([
            r.id.clone(),
            a.serial.to_string(),
            a.size.to_string(),
            short_date(&a.created_at),
        ]);
    }
    Ok((table, records))
}

pub fn state_version_detail(
    resource: &Resource,
) -> Result<(TableData, StateVersionRecord), TfcError> {
    let record: StateVersionRecord = Record::from_resource(resource)?;
    let a = &record.attributes;
    let table = TableData::field_value([
        ("ID", record.id.clone()),
        ("Serial", a.serial.to_string()),
        ("Size", a.size.to_string()),
        ("Resources Processed", bool_str(a.resources_processed).to_string()),
        ("Created", a.created_at.clone()),
    ]);
    Ok((table, record))
}
