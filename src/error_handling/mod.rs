//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization and export
//! - Categorization of resolver errors into expected-empty and faults
//!
//! Per-domain and per-record-type failures never leave the resolver adapter or
//! the export writer; only initialization and console failures propagate.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_resolve_error, ResolveErrorCategory};
pub use types::{ExportError, InitializationError};
