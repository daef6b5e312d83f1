//! Credential and address resolution for the CLI layer.

use crate::config::TfcConfig;
use crate::error::TfcError;

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "TFC_TOKEN";

/// API token from `TFC_TOKEN`, trimmed.
pub fn get_token() -> Result<String, TfcError> {
    token_from(std::env::var(TOKEN_ENV).ok())
}

fn token_from(raw: Option<String>) -> Result<String, TfcError> {
    match raw.map(|t| t.trim().to_string()) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(TfcError::Auth(format!(
            "{} not set; export your Terraform Cloud API token",
            TOKEN_ENV
        ))),
    }
}

/// Base address from configuration (environment already layered in).
pub fn get_address(config: &TfcConfig) -> String {
    config.normalized_address().to_string()
}
