//! System-resolver record lookups.
//!
//! Renders answers to strings:
//! - TXT: the character-strings of each record joined without a separator
//! - everything else: the record data's presentation format

use std::str::FromStr;

use trust_dns_resolver::lookup::Lookup;
use trust_dns_resolver::proto::rr::{RData, RecordType as WireRecordType};
use trust_dns_resolver::Resolver;

use super::resolution::{LookupOutcome, RecordLookup};
use crate::error_handling::{categorize_resolve_error, ResolveErrorCategory};
use crate::models::RecordType;

/// Blocking resolver built from the system DNS configuration.
pub struct SystemResolver {
    resolver: Resolver,
}

impl SystemResolver {
    /// Wraps a configured `trust-dns` resolver.
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }
}

impl RecordLookup for SystemResolver {
    fn lookup(&self, domain: &str, record_type: &RecordType) -> LookupOutcome {
        let wire_type = match WireRecordType::from_str(record_type.as_str()) {
            Ok(wire_type) => wire_type,
            Err(e) => return LookupOutcome::Fault(e.to_string()),
        };

        match self.resolver.lookup(domain, wire_type) {
            Ok(lookup) => {
                let values = lookup_values(&lookup, wire_type);
                if values.is_empty() {
                    LookupOutcome::Empty
                } else {
                    LookupOutcome::Found(values)
                }
            }
            Err(e) => match categorize_resolve_error(&e) {
                ResolveErrorCategory::NoData => LookupOutcome::Empty,
                ResolveErrorCategory::Fault => LookupOutcome::Fault(e.to_string()),
            },
        }
    }
}

/// Renders the records of `wire_type` in an answer.
///
/// An A/AAAA answer may carry the CNAME chain that led to it; those records
/// are skipped.
pub(super) fn lookup_values(lookup: &Lookup, wire_type: WireRecordType) -> Vec<String> {
    lookup
        .record_iter()
        .filter(|record| record.record_type() == wire_type)
        .filter_map(|record| record.data())
        .map(render_rdata)
        .collect()
}

fn render_rdata(rdata: &RData) -> String {
    match rdata {
        RData::TXT(txt) => join_txt_segments(txt.txt_data()),
        other => other.to_string(),
    }
}

/// Concatenates the character-strings of one TXT record.
///
/// Segments are decoded as UTF-8, replacing invalid sequences.
pub fn join_txt_segments(segments: &[Box<[u8]>]) -> String {
    segments
        .iter()
        .map(|segment| String::from_utf8_lossy(segment))
        .collect()
}
