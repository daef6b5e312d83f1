//! Organization views.

use super::shared::{bool_str, null_default, short_date};
use crate::error::TfcError;
use crate::jsonapi::Resource;
use crate::output::TableData;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OrganizationAttributes {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub email: String,
    #[serde(deserialize_with = "null_default")]
    pub external_id: String,
    #[serde(deserialize_with = "null_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_default")]
    pub plan_identifier: String,
    #[serde(rename = "cost-estimation-enabled", deserialize_with = "null_default")]
    pub cost_estimation: bool,
    #[serde(deserialize_with = "null_default")]
    pub managed_resource_count: u64,
    #[serde(rename = "default-execution-mode", deserialize_with = "null_default")]
    pub default_exec_mode: String,
    #[serde(deserialize_with = "null_default")]
    pub sso_enabled: bool,
    #[serde(deserialize_with = "null_default")]
    pub two_factor_conformant: bool,
}

/// Organizations carry their name next to the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationRecord {
    pub id: String,
    pub name: String,
    pub attributes: OrganizationAttributes,
}

impl OrganizationRecord {
    fn from_resource(resource: &Resource) -> Result<Self, TfcError> {
        let attributes: OrganizationAttributes = resource.unmarshal_attributes()?;
        Ok(Self {
            id: resource.id.clone(),
            name: attributes.name.clone(),
            attributes,
        })
    }
}

pub fn organization_list(
    resources: &[Resource],
) -> Result<(TableData, Vec<OrganizationRecord>), TfcError> {
    let mut table = TableData::new(["NAME", "EMAIL", "PLAN", "RESOURCES", "EXEC MODE", "CREATED"]);
    let mut records = Vec::with_capacity(resources.len());
    for resource in resources {
        let record = OrganizationRecord::from_resource(resource)?;
        let a = &record.attributes;
        table.push_row([
            a.name.clone(),
            a.email.clone(),
            a.plan_identifier.clone(),
            a.managed_resource_count.to_string(),
            a.default_exec_mode.clone(),
            short_date(&a.created_at),
        ]);
        records.push(record);
    }
    Ok((table, records))
}

pub fn organization_detail(
    resource: &Resource,
) -> Result<(TableData, OrganizationRecord), TfcError> {
    let record = OrganizationRecord::from_resource(resource)?;
    let a = &record.attributes;
    let table = TableData::field_value([
        ("Name", a.name.clone()),
        ("External ID", a.external_id.clone()),
        ("Email", a.email.clone()),
        ("Plan", a.plan_identifier.clone()),
        ("Managed Resources", a.managed_resource_count.to_string()),
        ("Execution Mode", a.default_exec_mode.clone()),
        ("SSO Enabled", bool_str(a.sso_enabled).to_string()),
        ("Created", a.created_at.clone()),
    ]);
    Ok((table, record))
}
