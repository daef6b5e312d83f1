//! Merge rules for configuration sources.

mod merge_policy;

pub use merge_policy::{builder_with_defaults, DEFAULT_ADDRESS, DEFAULT_PAGE_SIZE};
