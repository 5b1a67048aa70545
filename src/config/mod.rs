//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default record types, file names)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{default_record_types, parse_domain_list, Config, LogLevel, RunMode};
