//! DNS resolution and record querying.
//!
//! This module provides blocking DNS lookups using `trust-dns-resolver`:
//! - A [`RecordLookup`] seam returning a [`LookupOutcome`] per (domain, type)
//! - [`resolve`], which queries a list of types one at a time and logs faults
//! - [`SystemResolver`], the production lookup backed by the system configuration

mod records;
mod resolution;

// Re-export public API
pub use records::{join_txt_segments, SystemResolver};
pub use resolution::{resolve, LookupOutcome, RecordLookup};
