//! Merge rules: defaults first, later sources override earlier ones.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Default Terraform Cloud address.
pub const DEFAULT_ADDRESS: &str = "https://app.terraform.io";

/// Default `page[size]` for list commands.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("address", DEFAULT_ADDRESS)?
        .set_default("page_size", DEFAULT_PAGE_SIZE)?
        .set_default("no_color", false)
}
