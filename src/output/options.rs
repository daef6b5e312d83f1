//! Output options: the resolved rendering mode plus shaping flags.
//!
//! Mode resolution happens once, at the CLI boundary, through
//! [`OutputOptions::from_flags`]. Everything downstream treats the options as
//! immutable input.

use crate::error::TfcError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output rendering mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Aligned grid, colored headers on a TTY
    #[default]
    Table,
    /// Tab-separated, no colors
    Plaintext,
    /// Pruned, indented JSON
    Json,
    /// User template evaluated against the decoded tree
    Template,
}

/// Raw output flags as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct OutputFlags {
    pub json: bool,
    pub plaintext: bool,
    pub template: Option<String>,
    pub query: Option<String>,
    pub fields: Option<String>,
    pub no_color: bool,
    pub debug: bool,
    pub output: Option<PathBuf>,
}

/// Resolved output configuration passed into every render call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub mode: Mode,
    pub no_color: bool,
    pub query_expr: String,
    pub field_spec: String,
    pub template: String,
    pub debug: bool,
    pub output_file: Option<PathBuf>,
}

impl OutputOptions {
    /// Resolve flags into options.
    ///
    /// `--json`, `--plaintext` and `--template` are mutually exclusive. A query
    /// expression or field selection forces JSON mode. `env_no_color` is the
    /// environment-level "no color" signal, folded into `no_color` here so the
    /// renderer never consults the environment.
    pub fn from_flags(flags: &OutputFlags, env_no_color: bool) -> Result<Self, TfcError> {
        let template = flags.template.clone().unwrap_or_default();
        let query_expr = flags.query.clone().unwrap_or_default();
        let field_spec = flags.fields.clone().unwrap_or_default();

        let chosen = [flags.json, flags.plaintext, !template.is_empty()]
            .iter()
            .filter(|set| **set)
            .count();
        if chosen > 1 {
            return Err(TfcError::Usage(
                "--json, --plaintext, and --template are mutually exclusive".to_string(),
            ));
        }

        let mode = if flags.json || !query_expr.is_empty() || !field_spec.is_empty() {
            Mode::Json
        } else if flags.plaintext {
            Mode::Plaintext
        } else if !template.is_empty() {
            Mode::Template
        } else {
            Mode::Table
        };

        Ok(Self {
            mode,
            no_color: flags.no_color || env_no_color,
            query_expr,
            field_spec,
            template,
            debug: flags.debug,
            output_file: flags.output.clone().filter(|p| !p.as_os_str().is_empty()),
        })
    }

    /// Dotted field paths from the comma-separated field spec.
    pub fn field_paths(&self) -> Vec<String> {
        parse_field_list(&self.field_spec)
    }
}

/// True when the `NO_COLOR` convention asks for plain output.
pub fn no_color_from_env() -> bool {
    std::env::var_os("NO_COLOR").map_or(false, |v| !v.is_empty())
}

/// Split a comma-separated field list, trimming entries and dropping empties.
pub fn parse_field_list(spec: &str) -> Vec<String> {
    spec.split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect()
}

/// Rows and headers for table and plaintext output. Every row has
/// `headers.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Short rows are padded with empty cells and long rows
    /// truncated so the table stays rectangular.
    pub fn push_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Two-column FIELD/VALUE table used by detail views.
    pub fn field_value<K: Into<String>, V: Into<String>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        let mut td = Self::new(["FIELD", "VALUE"]);
        for (k, v) in pairs {
            td.push_row([k.into(), v.into()]);
        }
        td
    }
}
