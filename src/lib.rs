//! tfc: a Terraform Cloud client.
//!
//! Parses JSON:API envelopes, walks paginated list endpoints, and renders
//! results as tables, tab-separated text, pruned JSON, user templates, or
//! jq projections.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod jsonapi;
pub mod logging;
pub mod output;
pub mod pagination;
