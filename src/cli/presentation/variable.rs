//! Workspace variable views and the create request body.

use super::shared::{bool_str, default_str, null_default, records, truncate_str, Record};
use crate::error::TfcError;
use crate::jsonapi::Resource;
use crate::output::TableData;
use serde::{Deserialize, Serialize};

const VALUE_WIDTH: usize = 40;
const SENSITIVE: &str = "(sensitive)";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct VariableAttributes {
    #[serde(deserialize_with = "null_default")]
    pub key: String,
    #[serde(deserialize_with = "null_default")]
    pub value: String,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(deserialize_with = "null_default")]
    pub category: String,
    #[serde(deserialize_with = "null_default")]
    pub hcl: bool,
    #[serde(deserialize_with = "null_default")]
    pub sensitive: bool,
    #[serde(deserialize_with = "null_default")]
    pub created_at: String,
}

impl VariableAttributes {
    fn display_value(&self) -> &str {
        if self.sensitive {
            SENSITIVE
        } else {
            &self.value
        }
    }
}

pub type VariableRecord = Record<VariableAttributes>;

/// Attributes sent on `POST /workspaces/:id/vars`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewVariable {
    pub key: String,
    pub value: String,
    pub description: String,
    pub category: String,
    pub hcl: bool,
    pub sensitive: bool,
}

pub fn variable_list(resources: &[Resource]) -> Result<(TableData, Vec<VariableRecord>), TfcError> {
    let records: Vec<VariableRecord> = records(resources)?;
    let mut table = TableData::new(["ID", "KEY", "VALUE", "CATEGORY", "HCL", "SENSITIVE"]);
    for r in &records {
        let a = &r.attributes;
        table.push_row([
            r.id.clone(),
            a.key.clone(),
            truncate_str(a.display_value(), VALUE_WIDTH),
            a.category.clone(),
            bool_str(a.hcl).to_string(),
            bool_str(a.sensitive).to_string(),
        ]);
    }
    Ok((table, records))
}

pub fn variable_detail(resource: &Resource) -> Result<(TableData, VariableRecord), TfcError> {
    let record: VariableRecord = Record::from_resource(resource)?;
    let a = &record.attributes;
    let table = TableData::field_value([
        ("ID", record.id.clone()),
        ("Key", a.key.clone()),
        ("Value", a.display_value().to_string()),
        ("Description", default_str(&a.description, "-").to_string()),
        ("Category", a.category.clone()),
        ("HCL", bool_str(a.hcl).to_string()),
        ("Sensitive", bool_str(a.sensitive).to_string()),
        ("Created", a.created_at.clone()),
    ]);
    Ok((table, record))
}
