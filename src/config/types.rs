//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_RECORD_TYPES;
use crate::models::RecordType;

/// Logging level for the diagnostic log.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Command-line configuration.
///
/// # Examples
///
/// ```
/// use clap::Parser;
/// use dns_query_tool::{Config, RunMode};
///
/// let config = Config::try_parse_from(["dns_query_tool", "example.com", "-r", "a,mx"]).unwrap();
/// assert!(matches!(config.run_mode(), RunMode::Batch { .. }));
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "dns_query_tool", version, about = "DNS Query Tool")]
pub struct Config {
    /// Comma-separated list of domains to query. Omit to enter interactive mode.
    pub domains: Option<String>,

    /// Comma-separated DNS record types to query (e.g., A,AAAA,MX). If not provided,
    /// defaults to A,CNAME,AAAA,TXT with interactive selection.
    #[arg(short = 'r', long = "records")]
    pub records: Option<String>,

    /// Diagnostic log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Diagnostic log file (default: dns_tool_errors.log next to the executable)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domains: None,
            records: None,
            log_level: LogLevel::Warn,
            log_file: None,
        }
    }
}

/// Top-level mode, chosen once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Process an explicit domain list once.
    Batch {
        /// Domains in invocation order (may be empty if the argument held only separators)
        domains: Vec<String>,
        /// Explicit `--records` list; `None` means defaults with interactive selection
        records: Option<Vec<RecordType>>,
    },
    /// Prompt for one domain at a time until a blank line.
    Interactive,
}

impl Config {
    /// Decides the run mode from the positional domain argument.
    ///
    /// A missing or blank argument selects interactive mode.
    pub fn run_mode(&self) -> RunMode {
        match self.domains.as_deref() {
            Some(raw) if !raw.is_empty() => RunMode::Batch {
                domains: parse_domain_list(raw),
                records: self.explicit_record_types(),
            },
            _ => RunMode::Interactive,
        }
    }

    /// Record types given with `--records`, or `None` if absent or blank.
    pub fn explicit_record_types(&self) -> Option<Vec<RecordType>> {
        let types = RecordType::parse_list(self.records.as_deref()?);
        (!types.is_empty()).then_some(types)
    }
}

/// Default record types queried when none are given explicitly.
pub fn default_record_types() -> Vec<RecordType> {
    DEFAULT_RECORD_TYPES
        .iter()
        .map(|tag| RecordType::new(tag))
        .collect()
}

/// Splits a comma-separated domain list, trimming entries and dropping blanks.
pub fn parse_domain_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|domain| !domain.is_empty())
        .map(str::to_string)
        .collect()
}
