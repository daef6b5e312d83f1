//! tfc CLI Binary
//!
//! Command-line interface for Terraform Cloud.

use clap::Parser;
use std::process;
use tfc::cli::{map_error, Cli, RunContext};
use tfc::config::{ConfigLoader, TfcConfig};
use tfc::error::TfcError;
use tfc::logging::{init_logging, LoggingConfig};
use tfc::output::{no_color_from_env, OutputOptions};
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let loaded = load_config(&cli);

    // Build logging config from CLI args and config file
    let logging_config = build_logging_config(&cli, loaded.as_ref().ok());

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("{}", map_error(&e));
        process::exit(e.exit_code());
    }

    info!("tfc starting");

    match run(&cli, loaded) {
        Ok(()) => info!("Command completed successfully"),
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(e.exit_code());
        }
    }
}

fn load_config(cli: &Cli) -> Result<TfcConfig, TfcError> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

fn run(cli: &Cli, loaded: Result<TfcConfig, TfcError>) -> Result<(), TfcError> {
    let config = loaded?;
    let mut flags = cli.output.to_flags();
    flags.no_color |= config.no_color;
    let options = OutputOptions::from_flags(&flags, no_color_from_env())?;
    let context = RunContext::new(&config, options, cli.org.clone())?;
    context.execute(&cli.command)
}

/// Build logging configuration from CLI args and the config file.
/// Precedence: explicit log flags, then --debug, then the config file, then defaults.
fn build_logging_config(cli: &Cli, config: Option<&TfcConfig>) -> LoggingConfig {
    let mut logging = config.map(|c| c.logging.clone()).unwrap_or_default();

    if cli.output.debug {
        logging.level = "debug".to_string();
    }
    if cli.output.no_color {
        logging.color = false;
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
    }

    logging
}
