//! # CLI Layer
//!
//! The only place in keepmd that:
//! - Knows about stdout/stderr
//! - Installs the log subscriber
//! - Merges command-line flags over loaded configuration
//!
//! Everything else is delegated to `keepmdapp`.

use super::render::render_report;
use super::setup::{parse_cli, Cli};
use anyhow::{Context, Result};
use keepmdapp::commands::convert::{self, BatchOptions};
use keepmdapp::config::{normalize_tag_prefix, KeepmdConfig};
use keepmdapp::output::OutputFolder;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = parse_cli();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = KeepmdConfig::load(&cwd).context("Failed to load configuration")?;
    tracing::debug!(?config, "Loaded configuration");

    let opts = batch_options(&cli, &config);
    let report = convert::run(&opts)?;

    print!("{}", render_report(&report, cli.output)?);
    Ok(())
}

/// Logs go to stderr so stdout stays clean for the report. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Loaded configuration, overridden by whatever flags were given.
fn batch_options(cli: &Cli, config: &KeepmdConfig) -> BatchOptions {
    let output = OutputFolder::new(&cli.target_path, &cli.folder_name);
    let mut opts = BatchOptions::from_config(&cli.source_path, output, config);

    opts.convert_trashed |= cli.convert_trashed;
    opts.convert_archived |= cli.convert_archived;
    opts.overwrite |= cli.overwrite;
    if cli.no_color_tags {
        opts.convert_color_as_tag = false;
    }
    if let Some(prefix) = &cli.tag_prefix {
        opts.tag_prefix = normalize_tag_prefix(prefix);
    }
    opts
}
