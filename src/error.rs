//! Error types for the tfc client.
//!
//! Every fallible operation in the library returns [`TfcError`]. The CLI layer maps
//! each variant to a stable machine kind and exit code; the library never prints
//! or exits on its own.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while fetching, decoding, or rendering API responses
#[derive(Debug, Error)]
pub enum TfcError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("API error (status {}): {message}", status.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string()))]
    Remote {
        status: Option<u16>,
        message: String,
    },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Query parse error: {0}")]
    QueryParse(String),

    #[error("Query evaluation error: {0}")]
    QueryEval(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Output file {}: {source}", path.display())]
    FileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Usage(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TfcError {
    /// Stable, machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            TfcError::Decode(_) => "decode_error",
            TfcError::Remote {
                status: Some(404), ..
            } => "not_found",
            TfcError::Remote { .. } => "api_error",
            TfcError::Transport(_) => "transport_error",
            TfcError::Timeout(_) => "timeout",
            TfcError::QueryParse(_) => "query_parse_error",
            TfcError::QueryEval(_) => "query_eval_error",
            TfcError::Template(_) => "template_error",
            TfcError::FileIo { .. } => "file_io_error",
            TfcError::Io(_) => "io_error",
            TfcError::Usage(_) => "usage_error",
            TfcError::Auth(_) => "auth_failed",
            TfcError::NotFound(_) => "not_found",
            TfcError::Config(_) => "config_error",
            TfcError::Internal(_) => "internal_error",
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            TfcError::Usage(_) | TfcError::Timeout(_) => 2,
            _ => 1,
        }
    }
}

impl From<config::ConfigError> for TfcError {
    fn from(err: config::ConfigError) -> Self {
        TfcError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for TfcError {
    fn from(err: serde_json::Error) -> Self {
        TfcError::Decode(err.to_string())
    }
}
