//! Shared presentation helpers: cell formatting and the list record shape.

use crate::error::TfcError;
pub use crate::jsonapi::null_default;
use crate::jsonapi::{Pagination, Resource};
use owo_colors::OwoColorize;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{IsTerminal, Write};

/// `{ "id": .., "attributes": .. }`, the JSON shape of list and detail views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record<A> {
    pub id: String,
    pub attributes: A,
}

impl<A: DeserializeOwned> Record<A> {
    pub fn from_resource(resource: &Resource) -> Result<Self, TfcError> {
        Ok(Self {
            id: resource.id.clone(),
            attributes: resource.unmarshal_attributes()?,
        })
    }
}

/// Decode every resource in order.
pub fn records<A: DeserializeOwned>(resources: &[Resource]) -> Result<Vec<Record<A>>, TfcError> {
    resources.iter().map(Record::from_resource).collect()
}

/// Date portion of an RFC 3339 timestamp.
pub fn short_date(ts: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(ts) {
        Ok(dt) => dt.format("%Y-%m-%d").to_string(),
        Err(_) => ts.chars().take(10).collect(),
    }
}

pub fn bool_str(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

/// Cut `s` to at most `max` characters, ending in `...` when shortened.
pub fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max <= 3 {
        return s.chars().take(max).collect();
    }
    let mut out: String = s.chars().take(max - 3).collect();
    out.push_str("...");
    out
}

pub fn default_str<'a>(s: &'a str, fallback: &'a str) -> &'a str {
    if s.is_empty() {
        fallback
    } else {
        s
    }
}

/// `Page c/t (n total)`
pub fn page_note(pagination: &Pagination) -> String {
    format!(
        "Page {}/{} ({} total)",
        pagination.current_page, pagination.total_pages, pagination.total_count
    )
}

/// Write the page note to stderr, dimmed on an interactive terminal.
pub fn print_page_note(pagination: &Pagination, no_color: bool) {
    let note = page_note(pagination);
    let stderr = std::io::stderr();
    let mut lock = stderr.lock();
    // A failed note write must not fail the command.
    let _ = if !no_color && stderr.is_terminal() {
        writeln!(lock, "{}", note.dimmed())
    } else {
        writeln!(lock, "{}", note)
    };
}
