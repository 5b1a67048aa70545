//! dns_query_tool library: DNS record lookups with preview and export.
//!
//! Resolves a set of record types for one or more domains, lets the user narrow
//! the types to keep, previews the results as a table and as JSON, and
//! optionally saves them as JSON or CSV.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use dns_query_tool::initialization::{init_diagnostic_log, init_resolver};
//! use dns_query_tool::{app::Console, run, Config};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::parse_from(["dns_query_tool", "example.com", "--records", "A,MX"]);
//! let log = init_diagnostic_log(config.log_file.as_deref(), config.log_level.clone().into());
//! let resolver = init_resolver(&log)?;
//! run(&config, &resolver, &mut Console::stdio(), &log)?;
//! log.close();
//! # Ok(())
//! # }
//! ```
//!
//! Everything runs on the calling thread; one query completes before the next
//! is issued.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod display;
pub mod dns;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod models;
pub mod selection;

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::app::{run_batch, run_interactive, Console, Session};
use crate::dns::RecordLookup;
use crate::initialization::DiagnosticLog;

// Re-export public API
pub use config::{Config, LogLevel, RunMode};
pub use dns::{LookupOutcome, SystemResolver};
pub use models::{RecordSet, RecordType, ResultBundle};

/// Runs the mode selected by `config` to completion.
///
/// Per-domain and per-type failures are absorbed (resolver faults and failed
/// saves are logged); only console I/O errors are returned.
pub fn run<L, R, W>(
    config: &Config,
    resolver: &L,
    console: &mut Console<R, W>,
    log: &DiagnosticLog,
) -> Result<()>
where
    L: RecordLookup + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut session = Session::new(resolver, console, log);
    match config.run_mode() {
        RunMode::Batch { domains, records } => {
            run_batch(&mut session, &domains, records.as_deref())?;
        }
        RunMode::Interactive => {
            run_interactive(&mut session)?;
        }
    }
    Ok(())
}
