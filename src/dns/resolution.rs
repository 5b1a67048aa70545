//! Record set resolution.
//!
//! Queries each requested record type in order and folds the outcomes into a
//! [`RecordSet`]. Nothing here fails: empty answers and faults both become an
//! empty value list, and only faults are written to the diagnostic log.

use crate::initialization::DiagnosticLog;
use crate::models::{RecordSet, RecordType};

/// Result of a single (domain, record type) lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Record values in resolver order.
    Found(Vec<String>),
    /// No answer, domain does not exist, or no nameservers available.
    Empty,
    /// Any other failure, with a human-readable message.
    Fault(String),
}

/// A backend that performs one DNS query.
pub trait RecordLookup {
    /// Queries `record_type` records for `domain`.
    fn lookup(&self, domain: &str, record_type: &RecordType) -> LookupOutcome;
}

/// Resolves every type in `types` for `domain`, strictly one query at a time.
///
/// The returned set has an entry for every requested type, in request order.
/// A type repeated in `types` is queried again and its last answer kept.
pub fn resolve<L: RecordLookup + ?Sized>(
    lookup: &L,
    domain: &str,
    types: &[RecordType],
    log: &DiagnosticLog,
) -> RecordSet {
    let mut records = RecordSet::new();
    for record_type in types {
        let values = match lookup.lookup(domain, record_type) {
            LookupOutcome::Found(values) => values,
            LookupOutcome::Empty => Vec::new(),
            LookupOutcome::Fault(message) => {
                log.warn(format_args!(
                    "Error querying {record_type} records for {domain}: {message}"
                ));
                Vec::new()
            }
        };
        records.insert(record_type.clone(), values);
    }
    records
}
