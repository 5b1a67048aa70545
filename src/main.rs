//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_query_tool` library that handles:
//! - Command-line argument parsing
//! - Diagnostic log and interrupt handler setup
//! - Exit status and the top-level error message
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::process;

use dns_query_tool::app::Console;
use dns_query_tool::initialization::{
    init_diagnostic_log, init_interrupt_handler, init_resolver, DiagnosticLog,
};
use dns_query_tool::{run, Config};

fn main() {
    let config = Config::parse();

    let log = init_diagnostic_log(config.log_file.as_deref(), config.log_level.clone().into());
    if let Err(e) = init_interrupt_handler() {
        log.warn(format_args!("{e}"));
    }

    match run_app(&config, &log) {
        Ok(()) => log.close(),
        Err(e) => {
            log.error(format_args!("Unexpected error: {e:?}"));
            println!(
                "{}",
                format!("An unexpected error occurred: {e:#}. Check the log file for details.")
                    .red()
            );
            log.close();
            process::exit(1);
        }
    }
}

fn run_app(config: &Config, log: &DiagnosticLog) -> Result<()> {
    let resolver = init_resolver(log).context("Failed to initialize DNS resolver")?;
    let mut console = Console::stdio();
    run(config, &resolver, &mut console, log)
}
