//! JSON:API envelope parsing.
//!
//! Terraform Cloud wraps every response in a document with `data`, `included`,
//! `links`, `meta` and `errors`. `data` and resource `attributes` stay generic
//! [`Value`]s until a caller decodes them into the shape it needs.

use crate::error::TfcError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Top-level JSON:API response document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub data: Value,
    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub included: Vec<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub errors: Vec<ApiError>,
}

/// A single JSON:API resource object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default, deserialize_with = "null_default")]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub resource_type: String,
    #[serde(default)]
    pub attributes: Value,
    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub relationships: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
}

/// Document-level links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Page-based pagination cursor. `null` counters decode as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Pagination {
    #[serde(default, deserialize_with = "null_default")]
    pub current_page: u64,
    #[serde(default, deserialize_with = "null_default")]
    pub page_size: u64,
    #[serde(default, deserialize_with = "null_default")]
    pub prev_page: u64,
    #[serde(default, deserialize_with = "null_default")]
    pub next_page: u64,
    #[serde(default, deserialize_with = "null_default")]
    pub total_pages: u64,
    #[serde(default, deserialize_with = "null_default")]
    pub total_count: u64,
}

impl Pagination {
    /// True when this cursor marks the last page of the result set.
    pub fn is_last_page(&self) -> bool {
        self.next_page == 0 || self.current_page >= self.total_pages
    }
}

/// Wire fields the API may send as `null`; read as the type's default.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// JSON:API error object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub status: String,
    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub title: String,
    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub detail: String,
}

impl ApiError {
    /// `title - detail`, or whichever of the two is present.
    pub fn summary(&self) -> String {
        match (self.title.is_empty(), self.detail.is_empty()) {
            (false, false) => format!("{} - {}", self.title, self.detail),
            (false, true) => self.title.clone(),
            (true, false) => self.detail.clone(),
            (true, true) => "unknown error".to_string(),
        }
    }
}

impl Document {
    /// Pagination cursor from `meta`, if the endpoint is paginated.
    pub fn pagination(&self) -> Option<&Pagination> {
        self.meta.as_ref().and_then(|m| m.pagination.as_ref())
    }

    /// First embedded error as a [`TfcError::Remote`], if any.
    pub fn first_error(&self) -> Option<TfcError> {
        self.errors.first().map(|e| TfcError::Remote {
            status: e.status.parse().ok(),
            message: e.summary(),
        })
    }
}

/// Parse a document whose `data` holds a single resource.
pub fn parse_single(doc: &Document) -> Result<Resource, TfcError> {
    if let Some(err) = doc.first_error() {
        return Err(err);
    }
    if doc.data.is_null() {
        return Err(TfcError::Decode("parse resource: document has no data".to_string()));
    }
    Resource::deserialize(&doc.data)
        .map_err(|e| TfcError::Decode(format!("parse resource: {}", e)))
}

/// Parse a document whose `data` holds a list of resources.
pub fn parse_list(doc: &Document) -> Result<Vec<Resource>, TfcError> {
    if let Some(err) = doc.first_error() {
        return Err(err);
    }
    if doc.data.is_null() {
        return Ok(Vec::new());
    }
    Vec::<Resource>::deserialize(&doc.data)
        .map_err(|e| TfcError::Decode(format!("parse resources: {}", e)))
}

impl Resource {
    /// Decode `attributes` into `T`. Unknown keys are ignored; a missing
    /// attributes object decodes like an empty one.
    pub fn unmarshal_attributes<T: DeserializeOwned>(&self) -> Result<T, TfcError> {
        let attrs: Cow<'_, Value> = if self.attributes.is_null() {
            Cow::Owned(Value::Object(Default::default()))
        } else {
            Cow::Borrowed(&self.attributes)
        };
        T::deserialize(attrs.as_ref())
            .map_err(|e| TfcError::Decode(format!("parse attributes of {}: {}", self.id, e)))
    }

    /// Id of the resource linked through relationship `name`.
    pub fn relationship_id(&self, name: &str) -> Option<String> {
        self.relationships
            .get(name)?
            .get("data")?
            .get("id")?
            .as_str()
            .filter(|id| !id.is_empty())
            .map(str::to_string)
    }
}

/// Build a JSON:API request body for creating a resource.
pub fn wrap_for_create<T: Serialize>(resource_type: &str, attrs: &T) -> Result<Value, TfcError> {
    let attributes = serde_json::to_value(attrs)
        .map_err(|e| TfcError::Internal(format!("marshal attributes: {}", e)))?;
    Ok(json!({
        "data": {
            "type": resource_type,
            "attributes": attributes,
        }
    }))
}
