//! Resolver error categorization.
//!
//! Splits resolver failures into the expected "nothing there" answers and real
//! faults that are worth a line in the diagnostic log.

use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};

/// How a failed lookup should be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveErrorCategory {
    /// No answer, NXDOMAIN, or no usable nameservers.
    NoData,
    /// Timeout, transport, protocol or any other failure.
    Fault,
}

/// Categorizes a resolver error.
///
/// `NoRecordsFound` covers empty answers for every response code (NOERROR with
/// no data, NXDOMAIN, SERVFAIL from all servers). `NoConnections` means no
/// nameserver could be used at all.
pub fn categorize_resolve_error(error: &ResolveError) -> ResolveErrorCategory {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { .. } | ResolveErrorKind::NoConnections => {
            ResolveErrorCategory::NoData
        }
        _ => ResolveErrorCategory::Fault,
    }
}
