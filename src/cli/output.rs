//! CLI output: error mapping from library errors to the stable CLI surface.

use crate::error::TfcError;
use serde::Serialize;

/// Structured error written to stderr as a single JSON line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub error_type: &'static str,
    pub message: String,
    pub exit_code: i32,
}

impl ErrorReport {
    pub fn from_error(e: &TfcError) -> Self {
        Self {
            error_type: e.kind(),
            message: e.to_string(),
            exit_code: e.exit_code(),
        }
    }
}

/// Map an error to the JSON line printed on stderr.
pub fn map_error(e: &TfcError) -> String {
    let report = ErrorReport::from_error(e);
    serde_json::to_string(&report).unwrap_or_else(|_| {
        format!(
            "{{\"error_type\":\"{}\",\"exit_code\":{}}}",
            report.error_type, report.exit_code
        )
    })
}
