//! DNS resolver initialization.
//!
//! This module builds the blocking system resolver used for every lookup.

use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::system_conf::read_system_conf;
use trust_dns_resolver::Resolver;

use crate::dns::SystemResolver;
use crate::error_handling::InitializationError;
use crate::initialization::DiagnosticLog;

/// Initializes the DNS resolver for record lookups.
///
/// Uses the system resolver configuration (`/etc/resolv.conf` or the platform
/// equivalent). If it cannot be read, falls back to the library's default
/// upstream servers and logs a warning. Timeouts and attempts are left at the
/// configured defaults.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the resolver runtime
/// cannot be created.
pub fn init_resolver(log: &DiagnosticLog) -> Result<SystemResolver, InitializationError> {
    let (config, mut opts) = match read_system_conf() {
        Ok(system) => {
            log.info(format_args!(
                "Using system resolver configuration with {} nameserver(s)",
                system.0.name_servers().len()
            ));
            system
        }
        Err(e) => {
            log.warn(format_args!(
                "Failed to read system resolver configuration, using defaults: {e}"
            ));
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };
    // Query names exactly as given instead of walking search domains first
    opts.ndots = 0;

    let resolver = Resolver::new(config, opts)?;
    Ok(SystemResolver::new(resolver))
}
